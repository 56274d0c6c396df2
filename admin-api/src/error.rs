use failure::{Backtrace, Context, Fail};
use std::fmt;

/// The specific kind of error the HTTP transport can produce.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
    /// The request could not be sent, or the response body could not be read.
    #[fail(display = "HTTP transport error: {}", _0)]
    Http(String),
    /// The backend answered with a non-success status.
    #[fail(display = "Backend responded with status {}: {}", status, body)]
    Status { status: u16, body: String },
    /// A serialization / deserialization error
    #[fail(display = "Serialization error: {}", _0)]
    Serde(String),
    /// The base url joined with the request path is not a valid url.
    #[fail(display = "Invalid url: {}", _0)]
    InvalidUrl(String),
    /// The client configuration was rejected.
    #[fail(display = "Invalid configuration: {}", _0)]
    Config(String),
}

/// An error that can occur while talking to the admin API over HTTP
#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        self.inner.get_context()
    }

    /// The HTTP status the backend answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self.kind() {
            ErrorKind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Context::new(kind),
        }
    }
}

impl From<Context<ErrorKind>> for Error {
    fn from(inner: Context<ErrorKind>) -> Error {
        Error { inner }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        let kind = ErrorKind::Http(err.to_string());
        Error::from(err.context(kind))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        let kind = ErrorKind::Serde(err.to_string());
        Error::from(err.context(kind))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        let kind = ErrorKind::InvalidUrl(err.to_string());
        Error::from(err.context(kind))
    }
}
