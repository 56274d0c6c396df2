//! Transport abstraction the façade dispatches through.
//!
//! The façade never talks to the network itself; it hands a method, a path and
//! a serializable body to a [`Transport`] and returns whatever comes back. This
//! keeps the façade testable with a substitute transport.

use crate::endpoint::Method;
use async_trait::async_trait;
use serde::Serialize;

mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use self::http::{ApiResponse, HttpTransport};

/// Issues a single request and reports its outcome.
///
/// Implementations own serialization of the body, so every failure (encoding,
/// network, backend) is reported through `Self::Error`.
#[async_trait]
pub trait Transport: Send + Sync {
    type Response: Send;
    type Error: Send;

    /// Send one request with `body` as its payload.
    async fn send<B>(&self, method: Method, path: &str, body: &B) -> Result<Self::Response, Self::Error>
    where
        B: Serialize + Sync + ?Sized;

    async fn post<B>(&self, path: &str, body: &B) -> Result<Self::Response, Self::Error>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.send(Method::Post, path, body).await
    }
}
