//! Media day core: pure form state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod status;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{FormState, RequestId, RetrievalOutcome};
pub use status::{
    StatusMessage, DOWNLOADED_TEXT, NOT_FOUND_TEXT, PROCESSING_TEXT, VERIFICATION_FAILURE_TEXT,
};
pub use update::update;
pub use view_model::FormViewModel;
