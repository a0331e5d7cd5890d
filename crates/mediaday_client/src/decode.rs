use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

/// Standard alphabet, padding optional, stray bits in the last symbol ignored.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("artifact body is not valid base64: {message}")]
    InvalidBase64 { message: String },
}

/// Decode a base64 response body into raw archive bytes.
///
/// ASCII whitespace anywhere in the body is ignored, so line-wrapped payloads
/// and a trailing newline decode the same as the compact form.
pub fn decode_artifact(body: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: String = body
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    FORGIVING
        .decode(compact.as_bytes())
        .map_err(|err| DecodeError::InvalidBase64 {
            message: err.to_string(),
        })
}
