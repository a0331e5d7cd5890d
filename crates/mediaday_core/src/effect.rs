#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run one retrieval with the identity pair exactly as entered.
    Retrieve {
        request_id: crate::RequestId,
        identifier: String,
        name: String,
    },
}
