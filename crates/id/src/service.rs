//! Random UUIDs for document and submission set unique ids.

use crate::{IdError, IdResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// A random (v4) UUID rendered in the standard hyphenated lowercase form.
///
/// XDS document entries and submission sets carry a `urn:uuid:` entryUUID alongside their
/// dotted-decimal unique id. This wrapper guarantees the hyphenated lowercase form once
/// constructed, so ids compare and print consistently.
///
/// # Construction
/// - [`UuidService::new`] generates a fresh UUID.
/// - [`UuidService::parse`] validates an externally supplied identifier.
///
/// # Display format
/// `550e8400-e29b-41d4-a716-446655440000`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UuidService(Uuid);

impl Default for UuidService {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidService {
    /// Generates a new random UUID.
    ///
    /// # Returns
    ///
    /// A freshly generated RFC 4122 version 4 UUID wrapped in `UuidService`.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses a UUID string that must already be hyphenated and lowercase.
    ///
    /// This does **not** normalise other UUID forms (simple, braced or uppercase).
    ///
    /// # Arguments
    ///
    /// * `input` - UUID string in `8-4-4-4-12` lowercase hex form.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> IdResult<Self> {
        if !Self::is_canonical(input) {
            return Err(IdError::InvalidInput(format!(
                "UUID must be 36 lowercase hyphenated hex characters, got: '{}'",
                input
            )));
        }
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| IdError::InvalidInput(format!("Invalid UUID '{}': {}", input, e)))
    }

    /// Returns a copy of the inner `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns true if `input` is `8-4-4-4-12` lowercase hex.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 36
            && input.bytes().enumerate().all(|(i, b)| match i {
                8 | 13 | 18 | 23 => b == b'-',
                _ => matches!(b, b'0'..=b'9' | b'a'..=b'f'),
            })
    }

    /// Prefixed `urn:uuid:` form used in XDS metadata.
    pub fn urn(&self) -> String {
        self.0.urn().to_string()
    }
}

impl fmt::Display for UuidService {
    /// Formats the UUID hyphenated and lowercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for UuidService {
    type Err = IdError;

    /// Equivalent to [`UuidService::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UuidService::parse(s)
    }
}
