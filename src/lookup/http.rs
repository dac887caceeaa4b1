//! HTTP suggestion source
//!
//! Queries `GET <base-url>/freetestapi/products?search=<query>`.

use futures::FutureExt;
use futures::future::BoxFuture;

use super::SuggestionSource;
use crate::error::SuggestError;
use crate::suggestion::{Suggestion, parse_suggestions};

/// Path of the product search endpoint, relative to the base URL
const SEARCH_PATH: &str = "/freetestapi/products";

/// Suggestion source backed by the remote product search API
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: search_endpoint(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Join the base URL and the search path without doubling slashes
pub fn search_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SEARCH_PATH)
}

impl SuggestionSource for HttpSource {
    fn search(&self, query: &str) -> BoxFuture<'static, Result<Vec<Suggestion>, SuggestError>> {
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("search", query)]);

        async move {
            let response = request.send().await?.error_for_status()?;
            let body = response.text().await?;
            parse_suggestions(&body)
        }
        .boxed()
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
