#[macro_use]
extern crate failure;

use admin_api::endpoint::join_path;
use admin_api::{Endpoint, PageNo, PageSize, ENDPOINTS, PAGE_NO_KEY, PAGE_SIZE_KEY};
use failure::Error;
use serde_json::{Map, Value};

/// Resolves a logical operation name such as `department.page`.
pub fn resolve(name: &str) -> Result<&'static Endpoint, Error> {
    Endpoint::lookup(name).ok_or_else(|| {
        format_err!(
            "unknown operation '{}', run `admin list` to see available operations",
            name
        )
    })
}

/// Parses a `key=value` argument. Values that are valid JSON keep their JSON
/// type, anything else is sent as a string.
pub fn parse_param(arg: &str) -> Result<(String, Value), Error> {
    let (key, raw) = match arg.find('=') {
        Some(i) => (arg[..i].trim(), &arg[i + 1..]),
        None => bail!("expected KEY=VALUE, got '{}'", arg),
    };

    if key.is_empty() {
        bail!("missing key in '{}'", arg);
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Builds a request body from the pagination flags and free-form params.
pub fn build_body(
    page_no: Option<u32>,
    page_size: Option<u32>,
    params: Vec<(String, Value)>,
) -> Result<Value, Error> {
    let mut body = Map::new();

    if let Some(n) = page_no {
        body.insert(PAGE_NO_KEY.to_string(), PageNo::new(n)?.get().into());
    }
    if let Some(n) = page_size {
        body.insert(PAGE_SIZE_KEY.to_string(), PageSize::new(n)?.get().into());
    }

    for (key, value) in params {
        if key == PAGE_NO_KEY || key == PAGE_SIZE_KEY {
            bail!("use --page-no / --page-size instead of --param {}", key);
        }
        if body.insert(key.clone(), value).is_some() {
            bail!("parameter '{}' given more than once", key);
        }
    }

    Ok(Value::Object(body))
}

/// One line per registered operation: name, method and full path.
pub fn list_endpoints(base_path: &str) -> Vec<String> {
    ENDPOINTS
        .iter()
        .map(|e| {
            format!(
                "{:<20} {:<6} {}",
                e.name(),
                e.method.as_str(),
                join_path(base_path, e.path)
            )
        })
        .collect()
}

/// Pretty-prints JSON bodies, other bodies are returned as-is.
pub fn render(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}
