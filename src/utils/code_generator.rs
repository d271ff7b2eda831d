//! Short code generation and alias validation.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 9;

/// Longest short code accepted, generated or aliased.
pub const MAX_CODE_CHARS: usize = 19;

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character code. Collisions are not
/// coordinated here; the store rejects duplicates atomically.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Validates a caller-supplied alias.
///
/// The only rule is length: an alias must fit the short code column, at
/// most [`MAX_CODE_CHARS`] characters. Content is deliberately
/// unrestricted.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the alias is too long.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    let length = alias.chars().count();
    if length > MAX_CODE_CHARS {
        return Err(AppError::bad_request(
            "Alias should contain less than 20 characters",
            json!({ "provided_length": length }),
        ));
    }

    Ok(())
}
