//! Short code generation and validation utilities.
//!
//! Codes are [`SHORT_CODE_LENGTH`] characters drawn independently and uniformly from
//! the 62-symbol alphanumeric alphabet, giving 62^6 (about 5.7 * 10^10) possible codes.
//! Collisions are rare but possible, so uniqueness is enforced by the store, not here.

use crate::domain::entities::SHORT_CODE_LENGTH;
use rand::Rng;

/// Alphabet short codes are drawn from: `A-Z`, `a-z`, `0-9`.
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of candidate short codes.
///
/// Implementations must be callable concurrently from many tasks.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a fresh candidate. Candidates are not guaranteed to be unused.
    fn next_candidate(&self) -> String;
}

/// Production generator backed by the thread-local RNG.
///
/// Holds no state; each call seeds nothing and shares nothing with other calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn next_candidate(&self) -> String {
        generate_code()
    }
}

/// Generates a random short code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..SHORT_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Returns true if `code` could have been produced by [`generate_code`].
///
/// Anything else can never have been issued, so lookups for it are answered
/// without touching storage.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
