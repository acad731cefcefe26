//! Validity probe for the response body.
//!
//! The body is never used as data: the check only wants to know whether the
//! resource is well-formed JSON.
use serde::de::IgnoredAny;

/// Checks that the whole body is exactly one JSON value, surrounded by
/// optional whitespace.
///
/// Stricter than a streaming decoder that stops after the first value: a
/// body like `{}\n{}` is rejected here.
///
/// # Errors
///
/// Will return the decoder error if the body is empty, malformed or has
/// trailing data after the first value.
pub fn validate(body: &[u8]) -> Result<(), serde_json::Error> {
    serde_json::from_slice::<IgnoredAny>(body).map(|_| ())
}

#[must_use]
pub fn is_well_formed(body: &[u8]) -> bool {
    validate(body).is_ok()
}
