mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::debug;
use reqwest::Method;
use std::time::Duration;

/// Responsible for asynchronous interaction with the form API including
/// transformation of response data into explicitly-defined types.
///
pub struct FormApi {
    client: Client,
}

impl FormApi {
    /// Returns a new instance for the given collection URL.
    ///
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<FormApi, ApiError> {
        debug!("Initializing form API client for {}...", base_url);
        Ok(FormApi {
            client: Client::new(base_url, timeout)?,
        })
    }

    /// Returns every record in the collection, in server order.
    ///
    pub async fn list(&self) -> Result<Vec<Record>, ApiError> {
        debug!("Requesting all records...");
        let bytes = self.client.call(Method::GET, None).await?.bytes().await?;
        let records: Vec<Record> = serde_json::from_slice(&bytes)?;
        debug!("Retrieved {} records", records.len());
        Ok(records)
    }

    /// Create a record from the draft and return it with its assigned id.
    ///
    pub async fn create(&self, draft: &Draft) -> Result<Record, ApiError> {
        debug!("Creating record with code '{}'...", draft.code);
        let bytes = self
            .client
            .call_with_body(Method::POST, None, Some(draft))
            .await?
            .bytes()
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Replace the editable fields of a record and return the server's
    /// representation of it.
    ///
    pub async fn update(&self, id: &RecordId, draft: &Draft) -> Result<Record, ApiError> {
        debug!("Updating record {}...", id);
        let bytes = self
            .client
            .call_with_body(Method::PUT, Some(id), Some(draft))
            .await?
            .bytes()
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Delete a record. Any body in the response is ignored.
    ///
    pub async fn delete(&self, id: &RecordId) -> Result<(), ApiError> {
        debug!("Deleting record {}...", id);
        self.client.call(Method::DELETE, Some(id)).await?;
        Ok(())
    }
}
