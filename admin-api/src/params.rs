//! Typed request parameters shared by the paginated admin operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroU32;

/// Body key of the page number.
pub const PAGE_NO_KEY: &str = "pageNo";
/// Body key of the page size.
pub const PAGE_SIZE_KEY: &str = "pageSize";

/// Rejected request parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamError {
    PageNo(u64),
    PageSize(u64),
    /// A filter tried to use one of the pagination keys.
    ReservedKey(String),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParamError::PageNo(n) => write!(f, "page number must be at least 1, got {}", n),
            ParamError::PageSize(n) => write!(
                f,
                "page size must be between 1 and {}, got {}",
                PageSize::MAX,
                n
            ),
            ParamError::ReservedKey(key) => {
                write!(f, "'{}' is reserved for pagination and cannot be a filter", key)
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// Backend-defined filter fields, sent as top-level keys of the request body.
///
/// The pagination keys are refused so they never appear twice in the body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Filters(BTreeMap<String, Value>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ParamError> {
        if key == PAGE_NO_KEY || key == PAGE_SIZE_KEY {
            return Err(ParamError::ReservedKey(key.to_string()));
        }
        Ok(self.0.insert(key.to_string(), value.into()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One-based page number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u32")]
pub struct PageNo(NonZeroU32);

impl PageNo {
    pub const FIRST: PageNo = PageNo(NonZeroU32::MIN);

    pub fn new(n: u32) -> Result<Self, ParamError> {
        NonZeroU32::new(n)
            .map(PageNo)
            .ok_or(ParamError::PageNo(u64::from(n)))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u64> for PageNo {
    type Error = ParamError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        u32::try_from(n)
            .ok()
            .and_then(NonZeroU32::new)
            .map(PageNo)
            .ok_or(ParamError::PageNo(n))
    }
}

impl From<PageNo> for u32 {
    fn from(p: PageNo) -> u32 {
        p.get()
    }
}

/// Number of rows per page, bounded by [`PageSize::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    pub const MAX: u32 = 1000;
    pub const DEFAULT: PageSize = PageSize(10);

    pub fn new(n: u32) -> Result<Self, ParamError> {
        if n == 0 || n > Self::MAX {
            return Err(ParamError::PageSize(u64::from(n)));
        }
        Ok(PageSize(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u64> for PageSize {
    type Error = ParamError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        u32::try_from(n)
            .map_err(|_| ParamError::PageSize(n))
            .and_then(PageSize::new)
    }
}

impl From<PageSize> for u32 {
    fn from(p: PageSize) -> u32 {
        p.get()
    }
}

/// Pagination fields as the backend names them (`pageNo`, `pageSize`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page_no: PageNo,
    pub page_size: PageSize,
}

impl PageParams {
    pub fn new(page_no: u32, page_size: u32) -> Result<Self, ParamError> {
        Ok(PageParams {
            page_no: PageNo::new(page_no)?,
            page_size: PageSize::new(page_size)?,
        })
    }
}

impl Default for PageParams {
    fn default() -> Self {
        PageParams {
            page_no: PageNo::FIRST,
            page_size: PageSize::DEFAULT,
        }
    }
}
