use crate::api::{Draft, FormApi, RecordId};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    FetchRecords,
    CreateRecord { draft: Draft },
    UpdateRecord { id: RecordId, draft: Draft },
    DeleteRecord { id: RecordId },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    api: &'a FormApi,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, api: &'a FormApi) -> Self {
        Handler { state, api }
    }

    /// Handle network events by type. Every event counts as finished once
    /// this returns, whether or not the request succeeded.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        let result = match event {
            Event::FetchRecords => self.fetch_records().await,
            Event::CreateRecord { draft } => self.create_record(draft).await,
            Event::UpdateRecord { id, draft } => self.update_record(id, draft).await,
            Event::DeleteRecord { id } => self.delete_record(id).await,
        };
        self.state.lock().await.request_finished();
        result
    }

    /// Replace state records with the full collection. The generation is
    /// read as the request starts, so mutations queued before this fetch
    /// do not make its response stale.
    ///
    async fn fetch_records(&mut self) -> Result<()> {
        info!("Fetching records...");
        let generation = self.state.lock().await.records_generation();
        let records = self.api.list().await.map_err(|e| {
            error!("Failed to fetch records: {}", e);
            e
        })?;
        let count = records.len();
        let mut state = self.state.lock().await;
        if state.set_records(records, generation) {
            info!("Loaded {} records.", count);
        }
        Ok(())
    }

    /// Create a record and append it to state.
    ///
    async fn create_record(&mut self, draft: Draft) -> Result<()> {
        info!("Creating record with code '{}'...", draft.code);
        let record = self.api.create(&draft).await.map_err(|e| {
            error!("Failed to create record: {}", e);
            e
        })?;
        info!("Created record {}.", record.id);
        self.state.lock().await.record_created(record);
        Ok(())
    }

    /// Update a record and replace it in state.
    ///
    async fn update_record(&mut self, id: RecordId, draft: Draft) -> Result<()> {
        info!("Updating record {}...", id);
        let record = self.api.update(&id, &draft).await.map_err(|e| {
            error!("Failed to update record {}: {}", id, e);
            e
        })?;
        info!("Updated record {}.", record.id);
        self.state.lock().await.record_updated(record)?;
        Ok(())
    }

    /// Delete a record and remove it from state. Failures are also shown to
    /// the user as a notice.
    ///
    async fn delete_record(&mut self, id: RecordId) -> Result<()> {
        info!("Deleting record {}...", id);
        if let Err(e) = self.api.delete(&id).await {
            error!("Failed to delete record {}: {}", id, e);
            self.state
                .lock()
                .await
                .set_notice(format!("Could not delete record {}: {}", id, e));
            return Err(e.into());
        }
        info!("Deleted record {}.", id);
        let mut state = self.state.lock().await;
        state.clear_notice();
        state.record_removed(&id)?;
        Ok(())
    }
}
