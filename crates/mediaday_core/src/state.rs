use std::collections::BTreeSet;

use mediaday_logging::{mediaday_debug, mediaday_warn};

use crate::view_model::FormViewModel;
use crate::StatusMessage;

pub type RequestId = u64;

/// Terminal result of one retrieval, as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalOutcome {
    Downloaded,
    NotFound,
    ServerError { status: u16, status_text: String },
    VerificationFailure,
}

impl RetrievalOutcome {
    pub fn status_message(&self) -> StatusMessage {
        match self {
            RetrievalOutcome::Downloaded => StatusMessage::Downloaded,
            RetrievalOutcome::NotFound => StatusMessage::NotFound,
            RetrievalOutcome::ServerError {
                status,
                status_text,
            } => StatusMessage::ServerError {
                status: *status,
                status_text: status_text.clone(),
            },
            RetrievalOutcome::VerificationFailure => StatusMessage::VerificationFailure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    identifier: String,
    name: String,
    status: Option<StatusMessage>,
    in_flight: BTreeSet<RequestId>,
    next_request_id: RequestId,
    status_writes: u64,
    dirty: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            identifier: String::new(),
            name: String::new(),
            status: None,
            in_flight: BTreeSet::new(),
            next_request_id: 1,
            status_writes: 0,
            dirty: false,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> FormViewModel {
        FormViewModel {
            identifier: self.identifier.clone(),
            name: self.name.clone(),
            status: self.status.clone(),
            status_line: self
                .status
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            in_flight: self.in_flight.len(),
            dirty: self.dirty,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Requests submitted but not yet finished, in submission order.
    pub fn in_flight_requests(&self) -> Vec<RequestId> {
        self.in_flight.iter().copied().collect()
    }

    /// Total number of writes to the status line since construction.
    pub fn status_writes(&self) -> u64 {
        self.status_writes
    }

    /// Returns whether the view changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_identifier(&mut self, value: String) {
        self.identifier = value;
        self.mark_dirty();
    }

    pub(crate) fn set_name(&mut self, value: String) {
        self.name = value;
        self.mark_dirty();
    }

    /// Starts a new request: status goes to `Processing` and the id is tracked.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight.insert(request_id);
        self.write_status(StatusMessage::Processing);
        request_id
    }

    /// Records a terminal outcome. Last write wins across overlapping requests.
    pub(crate) fn finish_request(&mut self, request_id: RequestId, outcome: &RetrievalOutcome) {
        if !self.in_flight.remove(&request_id) {
            mediaday_warn!("Finished request {} was not in flight", request_id);
        }
        if !self.in_flight.is_empty() {
            mediaday_debug!(
                "Request {} finished with {} other request(s) still in flight",
                request_id,
                self.in_flight.len()
            );
        }
        self.write_status(outcome.status_message());
    }

    fn write_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
        self.status_writes += 1;
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
