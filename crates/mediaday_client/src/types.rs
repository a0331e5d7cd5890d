use std::fmt;

use crate::{DecodeError, PersistError, SavedArtifact};

pub type RequestId = u64;

#[derive(Debug)]
pub enum ClientEvent {
    RetrievalCompleted {
        request_id: RequestId,
        outcome: RetrievalOutcome,
    },
}

/// Result of one `retrieve` call. Never an error at the call site: every
/// failure is folded into `VerificationFailed`.
#[derive(Debug)]
pub enum RetrievalOutcome {
    Saved(SavedArtifact),
    NotFound,
    HttpStatus { status: u16, status_text: String },
    VerificationFailed(RetrievalError),
}

impl RetrievalOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, RetrievalOutcome::Saved(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("retrieval worker is not running")]
pub struct ClientStopped;

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("transport failure: {0}")]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("could not save artifact: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
