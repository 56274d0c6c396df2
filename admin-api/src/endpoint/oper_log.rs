//! Operation log.

use super::{Endpoint, Method};
use crate::api::AdminApi;
use crate::params::{Filters, PageParams, ParamError};
use crate::transport::Transport;
use serde::Serialize;
use serde_json::Value;

/// Paged operation log listing.
pub const OPER_LOG_PAGE: Endpoint = Endpoint {
    resource: "operationLog",
    operation: "page",
    path: "/operLog/page",
    method: Method::Post,
};

/// Body of an `operationLog.page` request. The default value serializes to `{}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OperLogPageParams {
    #[serde(flatten)]
    pub page: Option<PageParams>,
    #[serde(flatten)]
    pub filters: Filters,
}

impl OperLogPageParams {
    pub fn new(page: PageParams) -> Self {
        OperLogPageParams {
            page: Some(page),
            filters: Filters::new(),
        }
    }

    /// Adds a backend filter field. Fails for the pagination keys.
    pub fn filter(mut self, key: &str, value: impl Into<Value>) -> Result<Self, ParamError> {
        self.filters.insert(key, value)?;
        Ok(self)
    }
}

pub struct OperLogApi<'a, T> {
    api: &'a AdminApi<T>,
}

impl<'a, T: Transport> OperLogApi<'a, T> {
    pub(crate) fn new(api: &'a AdminApi<T>) -> Self {
        OperLogApi { api }
    }

    pub async fn page(&self, params: &OperLogPageParams) -> Result<T::Response, T::Error> {
        self.api.call(&OPER_LOG_PAGE, params).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::transport::mock::{MockError, RecordingTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_page_request() {
        let transport = RecordingTransport::new();
        let api = AdminApi::new(transport.clone());

        api.oper_log().page(&OperLogPageParams::default()).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Post);
        assert_eq!(calls[0].path, "/admin-api/operLog/page");
        assert_eq!(calls[0].body, json!({}));
    }

    #[test]
    fn test_filters_without_pagination() {
        let params = OperLogPageParams::default()
            .filter("module", "department")
            .unwrap();
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"module":"department"}"#
        );

        assert!(OperLogPageParams::default().filter("pageSize", 50).is_err());
    }

    #[tokio::test]
    async fn test_page_propagates_failure() {
        let transport = RecordingTransport::new();
        transport.respond_with(Err(MockError("503".to_string())));
        let api = AdminApi::new(transport);

        let params = OperLogPageParams::new(PageParams::default())
            .filter("operator", "admin")
            .unwrap();
        let err = api.oper_log().page(&params).await.unwrap_err();

        assert_eq!(err, MockError("503".to_string()));
    }
}
