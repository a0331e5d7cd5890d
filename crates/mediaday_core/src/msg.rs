#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the document number input.
    IdentifierChanged(String),
    /// User edited the full name input.
    NameChanged(String),
    /// User submitted the form.
    Submitted,
    /// Client completion for a retrieval.
    RetrievalFinished {
        request_id: crate::RequestId,
        outcome: crate::RetrievalOutcome,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
