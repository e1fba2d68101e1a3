/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Lazy, pull based iteration over paginated list endpoints
//!
//! A [`Paginator`] requests one page at a time and only when its buffered items
//! are exhausted, so abandoning it early never fetches the remaining pages.

use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::ListParams;
use crate::model::responses::PageResponse;
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// Item-by-item cursor over a paginated endpoint
///
/// ```rust,no_run
/// # async fn run(client: frisbo_client::application::client::Client) -> Result<(), frisbo_client::error::AppError> {
/// use frisbo_client::prelude::*;
///
/// let mut orders = client.list_orders(42, ListParams::new().with_per_page(50)).await?;
/// while let Some(order) = orders.next().await? {
///     println!("{}", order.order_reference);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Paginator<T> {
    http: Arc<HttpClient>,
    path: String,
    params: ListParams,
    next_page: Option<u32>,
    buffer: VecDeque<T>,
    pages_fetched: u32,
}

impl<T: DeserializeOwned + Send> Paginator<T> {
    /// Creates a paginator for `path`; nothing is requested until the first pull
    pub fn new(http: Arc<HttpClient>, path: impl Into<String>, params: ListParams) -> Self {
        let first = params.start_page();
        Self {
            http,
            path: path.into(),
            params,
            next_page: Some(first),
            buffer: VecDeque::new(),
            pages_fetched: 0,
        }
    }

    /// Returns the next item, fetching the following page when the buffer is empty
    ///
    /// `Ok(None)` marks the end of the sequence. After an error the paginator is
    /// finished and yields `Ok(None)` from then on.
    pub async fn next(&mut self) -> Result<Option<T>, AppError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            match self.next_page().await? {
                Some(items) => self.buffer.extend(items),
                None => return Ok(None),
            }
        }
    }

    /// Fetches the next whole page, bypassing the item buffer
    ///
    /// Returns `Ok(None)` once the last page has been consumed.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>, AppError> {
        let Some(page) = self.next_page else {
            return Ok(None);
        };

        let query = self.params.to_query(page);
        debug!("Fetching page {} of {}", page, self.path);

        let response: PageResponse<T> = match self.http.get(&self.path, &query).await {
            Ok(response) => response,
            Err(e) => {
                self.next_page = None;
                return Err(e);
            }
        };
        self.pages_fetched += 1;

        self.next_page = if response.is_last(page, self.params.per_page) {
            None
        } else {
            Some(page + 1)
        };

        debug!(
            "Page {} of {} returned {} items (last: {})",
            page,
            self.path,
            response.data.len(),
            self.next_page.is_none()
        );

        if response.data.is_empty() {
            return Ok(None);
        }
        Ok(Some(response.data))
    }

    /// Drains every remaining item into a vector
    pub async fn collect_all(mut self) -> Result<Vec<T>, AppError> {
        let mut items: Vec<T> = self.buffer.drain(..).collect();
        while let Some(page) = self.next_page().await? {
            items.extend(page);
        }
        debug!(
            "Collected {} items from {} in {} pages",
            items.len(),
            self.path,
            self.pages_fetched
        );
        Ok(items)
    }

    /// Number of pages requested so far
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Whether no buffered items or pages remain
    pub fn is_finished(&self) -> bool {
        self.buffer.is_empty() && self.next_page.is_none()
    }

    /// Endpoint path this paginator walks
    pub fn path(&self) -> &str {
        &self.path
    }
}
