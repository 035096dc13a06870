//! Short code generation.
//!
//! Codes are drawn from the OS random number generator and encoded with the
//! URL-safe base64 alphabet (`A-Z`, `a-z`, `0-9`, `-`, `_`).

use base64::Engine as _;

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a cryptographically secure random short code of `length` characters.
///
/// Draws `length` random bytes, encodes them as URL-safe base64 without
/// padding and truncates the result to `length` characters. Since base64
/// expands every 3 bytes into 4 characters, the encoding is always long enough.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut buffer = vec![0u8; length];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buffer);
    code.truncate(length);
    code
}
