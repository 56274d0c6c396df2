use std::fmt;

pub mod department;
pub mod oper_log;

/// Root path of the admin API on the backend.
pub const COMMON_ADMIN_API: &str = "/admin-api";

/// Every operation the client knows about.
pub static ENDPOINTS: &[Endpoint] = &[department::DEPARTMENT_PAGE, oper_log::OPER_LOG_PAGE];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Describes a single backend operation: where it lives and how it is called.
///
/// Descriptors are declared as constants and never change at runtime, so an
/// operation always resolves to the same `(path, method)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub resource: &'static str,
    pub operation: &'static str,
    /// Suffix appended to the admin API base path.
    pub path: &'static str,
    pub method: Method,
}

impl Endpoint {
    /// Logical name in the form `<resource>.<operation>`, e.g. `department.page`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.resource, self.operation)
    }

    /// Finds a registered endpoint by its logical name.
    pub fn lookup(name: &str) -> Option<&'static Endpoint> {
        let (resource, operation) = split_name(name)?;
        ENDPOINTS
            .iter()
            .find(|e| e.resource == resource && e.operation == operation)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.operation)
    }
}

fn split_name(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.splitn(2, '.');
    let resource = parts.next().filter(|s| !s.is_empty())?;
    let operation = parts.next().filter(|s| !s.is_empty())?;
    Some((resource, operation))
}

/// Joins a base path and an operation suffix with exactly one `/` between them.
pub fn join_path(base: &str, suffix: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        suffix.trim_start_matches('/')
    )
}
