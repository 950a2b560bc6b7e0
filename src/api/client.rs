//! HTTP client for form API requests.
//!
//! This module provides a low-level wrapper around `reqwest` that builds the
//! collection and per-record URLs, attaches JSON bodies and turns non-success
//! statuses into errors.

use super::error::ApiError;
use super::resource::RecordId;
use reqwest::{Method, Response};
use serde::Serialize;
use std::time::Duration;

/// Makes requests against one collection endpoint.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given collection URL, or an error if the
    /// URL is unusable or the HTTP client cannot be built.
    ///
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{} ({})", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(base_url.to_owned()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: builder.build()?,
        })
    }

    /// Return the URL for the whole collection, or for one record if an id is
    /// supplied.
    ///
    pub(crate) fn url(&self, id: Option<&RecordId>) -> String {
        match id {
            Some(id) => format!("{}/{}", self.base_url, id),
            None => self.base_url.clone(),
        }
    }

    /// Make request without a body and return the successful response.
    ///
    pub(crate) async fn call(
        &self,
        method: Method,
        id: Option<&RecordId>,
    ) -> Result<Response, ApiError> {
        self.call_with_body::<()>(method, id, None).await
    }

    /// Make request with an optional JSON body and return the successful
    /// response. Any non-2xx status is turned into an error that carries the
    /// response text.
    ///
    pub(crate) async fn call_with_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        id: Option<&RecordId>,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let request_url = self.url(id);
        log::debug!("{} {}", method, request_url);

        let mut request = self.http_client.request(method, &request_url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::debug!("API request failed with status {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
