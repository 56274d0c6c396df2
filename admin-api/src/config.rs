use crate::error::{Error, ErrorKind};
use std::time::Duration;
use url::Url;

/// Default user agent sent by the HTTP transport.
pub const DEFAULT_USER_AGENT: &str = "admin-api-rs";

/// Connection settings for the HTTP transport.
#[derive(Clone, Debug)]
pub struct Config {
    /// Origin of the backend, optionally with a gateway prefix.
    pub base_url: Url,
    /// Bearer token, attached to every request when set.
    pub auth: Option<String>,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(base_url: Url) -> Self {
        Config {
            base_url,
            auth: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }

    /// Parses `base_url` and builds an unauthenticated config.
    pub fn parse(base_url: &str) -> Result<Self, Error> {
        let cfg = Config::new(Url::parse(base_url)?);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that request paths can be appended to `base_url`.
    pub fn validate(&self) -> Result<(), Error> {
        let url = &self.base_url;
        let problem = if url.cannot_be_a_base() {
            "cannot be used as a base url"
        } else if url.query().is_some() {
            "must not carry a query string"
        } else if url.fragment().is_some() {
            "must not carry a fragment"
        } else {
            return Ok(());
        };

        Err(ErrorKind::Config(format!("{} {}", url, problem)).into())
    }

    pub fn new_authenticated(base_url: &str, auth: &str) -> Result<Self, Error> {
        if auth.trim().is_empty() {
            return Err(ErrorKind::Config("auth token is empty".to_string()).into());
        }

        Ok(Config {
            auth: Some(auth.to_string()),
            ..Config::parse(base_url)?
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}
