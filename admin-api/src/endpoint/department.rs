//! Department management.

use super::{Endpoint, Method};
use crate::api::AdminApi;
use crate::params::{Filters, PageParams, ParamError};
use crate::transport::Transport;
use serde::Serialize;
use serde_json::Value;

/// Paged department listing.
pub const DEPARTMENT_PAGE: Endpoint = Endpoint {
    resource: "department",
    operation: "page",
    path: "/department/page",
    method: Method::Post,
};

/// Body of a `department.page` request.
///
/// Pagination is optional; filters are passed through as top-level fields
/// since their names are defined by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DepartmentPageParams {
    #[serde(flatten)]
    pub page: Option<PageParams>,
    #[serde(flatten)]
    pub filters: Filters,
}

impl DepartmentPageParams {
    pub fn new(page: PageParams) -> Self {
        DepartmentPageParams {
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

pub struct DepartmentApi<'a, T> {
    api: &'a AdminApi<T>,
}

impl<'a, T: Transport> DepartmentApi<'a, T> {
    pub(crate) fn new(api: &'a AdminApi<T>) -> Self {
        DepartmentApi { api }
    }

    pub async fn page(&self, params: &DepartmentPageParams) -> Result<T::Response, T::Error> {
        self.api.call(&DEPARTMENT_PAGE, params).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::transport::mock::RecordingTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_department_page() {
        let transport = RecordingTransport::new();
        let api = AdminApi::new(transport.clone());

        let params = DepartmentPageParams::new(PageParams::new(1, 10).unwrap());
        api.department().page(&params).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Post);
        assert_eq!(calls[0].path, "/admin-api/department/page");
        assert_eq!(calls[0].body, json!({"pageNo": 1, "pageSize": 10}));
    }

    #[test]
    fn test_filters_are_top_level_fields() {
        let params = DepartmentPageParams::new(PageParams::new(2, 20).unwrap())
            .filter("name", "Finance")
            .unwrap()
            .filter("status", 0)
            .unwrap();

        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"pageNo":2,"pageSize":20,"name":"Finance","status":0}"#
        );
    }

    #[test]
    fn test_filter_cannot_shadow_pagination() {
        let page = PageParams::new(1, 10).unwrap();

        for key in &["pageNo", "pageSize"] {
            let err = DepartmentPageParams::new(page).filter(key, 5).unwrap_err();
            assert_eq!(err, ParamError::ReservedKey(key.to_string()));
        }

        // Keys must appear once in the encoded body, not only in the decoded value.
        let params = DepartmentPageParams::new(page).filter("pageno", 5).unwrap();
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"pageNo":1,"pageSize":10,"pageno":5}"#
        );
    }
}
