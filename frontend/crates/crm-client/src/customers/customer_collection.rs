use crate::customers::{
    CUSTOMERS_PATH, CollectionError, CollectionResult, Confirm, DELETE_PROMPT, SearchQuery,
    customer_path, records_from_payload, search_results_from_payload,
};
use crate::{Gateway, NO_BODY, Payload};

use std::sync::Arc;

use crm_core::{CustomerDraft, CustomerRecord, filter_records};
use log::{debug, info};
use reqwest::Method;

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user said no; nothing was sent
    Declined,
}

/// Locally cached customer list kept in step with the server.
///
/// Mutations never patch the list in place: after the server accepts one,
/// the whole list is fetched again so ids and field values are the server's.
pub struct CustomerCollection {
    gateway: Arc<Gateway>,
    records: Vec<CustomerRecord>,
    filter: String,
    editing: Option<CustomerRecord>,
    last_error: Option<String>,
}

impl CustomerCollection {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self::with_records(gateway, Vec::new())
    }

    /// Start from records already fetched, e.g. during login
    pub fn with_records(gateway: Arc<Gateway>, records: Vec<CustomerRecord>) -> Self {
        Self {
            gateway,
            records,
            filter: String::new(),
            editing: None,
            last_error: None,
        }
    }

    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn editing(&self) -> Option<&CustomerRecord> {
        self.editing.as_ref()
    }

    /// Display-ready message of the last failed operation
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Replace the local list with the server's.
    pub async fn refresh(&mut self) -> CollectionResult<()> {
        self.last_error = None;

        let payload = self
            .gateway
            .send(CUSTOMERS_PATH, Method::GET, NO_BODY, false)
            .await
            .map_err(|failure| self.fail(CollectionError::request(failure)))?;

        self.records = records_from_payload(payload);
        debug!("Fetched {} customers", self.records.len());
        Ok(())
    }

    /// Read one customer without touching the list.
    pub async fn get(&mut self, id: i64) -> CollectionResult<CustomerRecord> {
        self.last_error = None;

        let payload = self
            .gateway
            .send(&customer_path(id), Method::GET, NO_BODY, false)
            .await
            .map_err(|failure| self.fail(CollectionError::request(failure)))?;

        decode_record(payload).map_err(|e| self.fail(e))
    }

    /// Create on the server, then refresh. The list is untouched on failure.
    pub async fn create(&mut self, draft: &CustomerDraft) -> CollectionResult<()> {
        self.last_error = None;

        self.gateway
            .send(CUSTOMERS_PATH, Method::POST, Some(draft), false)
            .await
            .map_err(|failure| self.fail(CollectionError::request(failure)))?;

        info!("Created customer {}", draft.email);
        self.refresh().await
    }

    /// Make `id` the edit target. Returns false if it isn't in the list.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        self.editing = self.records.iter().find(|r| r.id == id).cloned();
        self.editing.is_some()
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the patch for the customer being edited, then refresh.
    ///
    /// Fails without sending anything unless `id` is the edit target.
    pub async fn update(&mut self, id: i64, patch: &CustomerDraft) -> CollectionResult<()> {
        self.last_error = None;

        if self.editing.as_ref().map(|r| r.id) != Some(id) {
            return Err(self.fail(CollectionError::no_edit_target(id)));
        }

        let body = CustomerRecord::from_draft(id, patch);
        self.gateway
            .send(&customer_path(id), Method::PUT, Some(&body), false)
            .await
            .map_err(|failure| self.fail(CollectionError::request(failure)))?;

        info!("Updated customer {id}");
        self.editing = None;
        self.refresh().await
    }

    /// Delete after the user confirms, then refresh.
    pub async fn delete(&mut self, id: i64, confirm: &dyn Confirm) -> CollectionResult<DeleteOutcome> {
        self.last_error = None;

        if !confirm.confirm(DELETE_PROMPT) {
            debug!("Delete of customer {id} declined");
            return Ok(DeleteOutcome::Declined);
        }

        self.gateway
            .send(&customer_path(id), Method::DELETE, NO_BODY, false)
            .await
            .map_err(|failure| self.fail(CollectionError::request(failure)))?;

        info!("Deleted customer {id}");
        if self.editing.as_ref().is_some_and(|r| r.id == id) {
            self.editing = None;
        }
        self.refresh().await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Local, case-insensitive filter over every field. No server call.
    pub fn search(&self, filter: &str) -> Vec<CustomerRecord> {
        filter_records(&self.records, filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Records matching the stored filter, in list order
    pub fn visible(&self) -> Vec<&CustomerRecord> {
        filter_records(&self.records, &self.filter)
    }

    /// Ask the server's search endpoint. The local list is not changed.
    pub async fn server_search(&mut self, query: &SearchQuery) -> CollectionResult<Vec<CustomerRecord>> {
        self.last_error = None;

        let payload = self
            .gateway
            .send(&query.path(), Method::GET, NO_BODY, false)
            .await
            .map_err(|failure| self.fail(CollectionError::request(failure)))?;

        Ok(search_results_from_payload(payload))
    }

    fn fail(&mut self, error: CollectionError) -> CollectionError {
        self.last_error = Some(error.display_message());
        error
    }
}

fn decode_record(payload: Payload) -> CollectionResult<CustomerRecord> {
    serde_json::from_value(payload.into_json())
        .map_err(|e| CollectionError::unexpected_payload(e.to_string()))
}
