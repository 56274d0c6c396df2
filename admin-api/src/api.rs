use crate::endpoint::department::DepartmentApi;
use crate::endpoint::oper_log::OperLogApi;
use crate::endpoint::{join_path, Endpoint, COMMON_ADMIN_API};
use crate::transport::Transport;
use serde::Serialize;

/// Typed entry point to the admin API.
///
/// Each call resolves a registered [`Endpoint`] to its full path, hands the
/// parameters to the transport as the request body and returns the
/// transport's result untouched. There is no retry, caching or error wrapping.
#[derive(Clone, Debug)]
pub struct AdminApi<T> {
    transport: T,
    base_path: String,
}

impl<T: Transport> AdminApi<T> {
    /// Dispatches through `transport` under [`COMMON_ADMIN_API`].
    pub fn new(transport: T) -> Self {
        Self::with_base_path(transport, COMMON_ADMIN_API)
    }

    pub fn with_base_path(transport: T, base_path: impl Into<String>) -> Self {
        AdminApi {
            transport,
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Full request path of `endpoint` under this client's base path.
    pub fn path_for(&self, endpoint: &Endpoint) -> String {
        join_path(&self.base_path, endpoint.path)
    }

    /// Issues exactly one request for `endpoint` with `params` as its body.
    pub async fn call<P>(&self, endpoint: &Endpoint, params: &P) -> Result<T::Response, T::Error>
    where
        P: Serialize + Sync + ?Sized,
    {
        let path = self.path_for(endpoint);
        log::debug!("dispatching {} to {} {}", endpoint, endpoint.method, path);
        self.transport.send(endpoint.method, &path, params).await
    }

    pub fn department(&self) -> DepartmentApi<'_, T> {
        DepartmentApi::new(self)
    }

    pub fn oper_log(&self) -> OperLogApi<'_, T> {
        OperLogApi::new(self)
    }
}
