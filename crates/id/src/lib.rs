//! Identifier generation for TUK document and workflow metadata.
//!
//! XDS and XDW documents carry unique identifiers in dotted-decimal OID form. TUK issues them as:
//!
//! `<root>.<timestamp>.<seed>`
//!
//! - `root` is the dotted-decimal prefix identifying the issuing system ([`IdRoot`]).
//!   The default is [`DEFAULT_ID_ROOT`].
//! - `timestamp` is the fixed-width local time `yyyyMMddHHmmssSSS` (17 digits).
//! - `seed` is a decimal counter owned by an [`OidGenerator`]. It starts from the first
//!   [`SEED_DIGITS`] digits of the clock's sub-second nanoseconds and increases by exactly one per
//!   generated identifier.
//!
//! Example: `1.2.40.0.13.1.1.3542466645.20211021090059143.32643`
//!
//! Two identifiers generated in the same millisecond by the same generator differ in their seed.
//! The seed is never reset or bounded, so after enough calls it grows past five digits.
//!
//! This crate also provides [`UuidService`], a thin wrapper for random (v4) UUIDs in the standard
//! hyphenated form.

mod oid;
mod root;
mod seed;
mod service;

pub use oid::{oid_timestamp, Oid, OidGenerator};
pub use root::IdRoot;
pub use seed::{Seed, SeedOrigin};
pub use service::{Uuid, UuidService};

/// Root used when no other root is configured.
pub const DEFAULT_ID_ROOT: &str = "1.2.40.0.13.1.1.3542466645";

/// Number of leading nanosecond digits used for the initial seed.
pub const SEED_DIGITS: usize = 5;

/// Length of the timestamp component of an [`Oid`].
pub const OID_TIMESTAMP_LEN: usize = 17;

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type IdResult<T> = Result<T, IdError>;
