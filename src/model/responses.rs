/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};

/// One page of a paginated list endpoint
///
/// Frisbo wraps list results as `{"data": [...], "current_page": n, "last_page": m, ...}`.
/// Every counter is optional; a bare `{"data": [...]}` is accepted as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResponse<T> {
    /// Items of this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Page number reported by the server
    #[serde(default)]
    pub current_page: Option<u32>,
    /// Last available page reported by the server
    #[serde(default)]
    pub last_page: Option<u32>,
    /// Page size reported by the server
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Total number of items
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> PageResponse<T> {
    /// Whether no page follows this one
    ///
    /// Any one signal ends the sequence: an empty page, `current_page >= last_page`
    /// when the server reports counters, or a page shorter than the page size (server
    /// value, else the requested one).
    pub fn is_last(&self, requested_page: u32, requested_per_page: Option<u32>) -> bool {
        if self.data.is_empty() {
            return true;
        }
        let past_last = self
            .last_page
            .is_some_and(|last_page| self.current_page.unwrap_or(requested_page) >= last_page);
        let short = self
            .per_page
            .or(requested_per_page)
            .is_some_and(|per_page| self.data.len() < per_page as usize);
        past_last || short
    }
}

/// Body of a non-paginated list endpoint
///
/// Accepts a bare JSON array as well as a `{"data": [...]}` wrapper.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListResponse<T> {
    /// `[...]`
    Plain(Vec<T>),
    /// `{"data": [...]}`
    Wrapped {
        /// Items of the list
        data: Vec<T>,
    },
}

impl<T> ListResponse<T> {
    /// Unwraps the items
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Plain(items) | ListResponse::Wrapped { data: items } => items,
        }
    }
}
