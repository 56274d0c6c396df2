use super::Transport;
use crate::endpoint::Method;
use crate::error::{Error, ErrorKind};
use crate::Config;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Response returned by the backend, kept as raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// [`Transport`] backed by a shared `reqwest` client.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    config: Config,
}

impl HttpTransport {
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpTransport {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Appends `path` to the base url, keeping any prefix the base url carries.
    pub fn url_for(&self, path: &str) -> Result<Url, Error> {
        let url = format!(
            "{}/{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&url)?)
    }

    /// Returns a request builder for the given method and path, with the
    /// configured credentials attached.
    fn request_builder(&self, method: Method, path: &str) -> Result<RequestBuilder, Error> {
        let url = self.url_for(path)?;
        let mut request_builder = self.client.request(method.into(), url);

        if let Some(token) = &self.config.auth {
            log::trace!("attaching bearer token to {} {}", method, path);
            request_builder = request_builder.bearer_auth(token);
        }

        Ok(request_builder)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    type Response = ApiResponse;
    type Error = Error;

    async fn send<B>(&self, method: Method, path: &str, body: &B) -> Result<ApiResponse, Error>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request_builder = self.request_builder(method, path)?;

        // Encode before building, so that only genuine builder failures
        // surface as `ErrorKind::Http`.
        let request_builder = match method {
            Method::Get => request_builder.query(&query_pairs(&serde_json::to_value(body)?)?),
            _ => request_builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?),
        };
        let request = request_builder.build()?;

        log::debug!("{} {}", method, request.url());

        let response = self.client.execute(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, path, e);
            e
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("{} {} answered {}", method, path, status);
            return Err(ErrorKind::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Flattens a JSON object into query pairs. Nulls are skipped; nested
/// values have no query string encoding and are rejected.
fn query_pairs(body: &Value) -> Result<Vec<(String, String)>, Error> {
    let map = match body {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            let msg = format!("query parameters must be an object, got {}", other);
            return Err(ErrorKind::Serde(msg).into());
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Bool(_) | Value::Number(_) => value.to_string(),
            Value::Array(_) | Value::Object(_) => {
                let msg = format!("query parameter '{}' cannot be nested", key);
                return Err(ErrorKind::Serde(msg).into());
            }
        };
        pairs.push((key.clone(), value));
    }

    Ok(pairs)
}
