//! Admin API
//!
//! Typed client for the backend admin API. Every operation is a fixed
//! `(path, method)` pair dispatched through an injected [`Transport`].
//!
//! ## Usage
//! ```no_run
//! use admin_api::{AdminApi, Config, HttpTransport, PageParams};
//! use admin_api::endpoint::department::DepartmentPageParams;
//!
//! # async fn run() -> Result<(), admin_api::Error> {
//! let cfg = Config::new_authenticated("https://erp.example.com", "secret_access_token")?;
//! let api = AdminApi::new(HttpTransport::new(cfg)?);
//!
//! let params = DepartmentPageParams::new(PageParams::new(1, 10).unwrap());
//! let page = api.department().page(&params).await?;
//! println!("{}", page.body);
//! # Ok(())
//! # }
//! ```

mod api;
mod config;
pub mod endpoint;
mod error;
pub mod params;
pub mod transport;

pub use api::AdminApi;
pub use config::{Config, DEFAULT_USER_AGENT};
pub use endpoint::{Endpoint, Method, COMMON_ADMIN_API, ENDPOINTS};
pub use error::{Error, ErrorKind};
pub use params::{
    Filters, PageNo, PageParams, PageSize, ParamError, PAGE_NO_KEY, PAGE_SIZE_KEY,
};
pub use transport::{ApiResponse, HttpTransport, Transport};
