use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Builds the `Authorization` header value for an identity pair.
///
/// The pair is joined as `identifier:name` and encoded with the standard
/// base64 alphabet. Neither value is validated; a `:` inside either one is
/// carried through unchanged.
pub fn basic_authorization(identifier: &str, name: &str) -> String {
    let token = STANDARD.encode(format!("{identifier}:{name}"));
    format!("Basic {token}")
}
