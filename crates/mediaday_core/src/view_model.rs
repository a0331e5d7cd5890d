use crate::StatusMessage;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub identifier: String,
    pub name: String,
    pub status: Option<StatusMessage>,
    /// Rendered status text; empty before the first submit.
    pub status_line: String,
    pub in_flight: usize,
    pub dirty: bool,
}
