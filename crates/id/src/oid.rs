//! Dotted-decimal identifiers and their generator.

use crate::{IdError, IdResult, IdRoot, Seed, OID_TIMESTAMP_LEN, SEED_DIGITS};
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use std::sync::atomic::{AtomicU64, Ordering};
use std::{fmt, str::FromStr};

/// Renders `at` as the 17-digit `yyyyMMddHHmmssSSS` identifier timestamp.
///
/// # Arguments
///
/// * `at` - Local date and time to render. Sub-millisecond precision is dropped.
///
/// # Returns
///
/// A fixed-width string of digits, e.g. `20211021090059143`.
pub fn oid_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y%m%d%H%M%S%3f").to_string()
}

fn parse_oid_timestamp(ts: &str) -> IdResult<NaiveDateTime> {
    let invalid = || IdError::InvalidInput(format!("Invalid identifier timestamp: '{}'", ts));

    if ts.len() != OID_TIMESTAMP_LEN || !ts.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // All bytes are ASCII digits, so these slices are on char boundaries and parse as numbers.
    let field = |range: std::ops::Range<usize>| ts[range].parse::<u32>().map_err(|_| invalid());
    let year = ts[0..4].parse::<i32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, field(4..6)?, field(6..8)?)
        .and_then(|date| {
            date.and_hms_milli_opt(
                field(8..10).ok()?,
                field(10..12).ok()?,
                field(12..14).ok()?,
                field(14..17).ok()?,
            )
        })
        .ok_or_else(invalid)
}

/// A generated identifier: `<root>.<yyyyMMddHHmmssSSS>.<seed>`.
///
/// # Display format
/// `1.2.40.0.13.1.1.3542466645.20211021090059143.32643`
///
/// Parsing with [`FromStr`] accepts exactly this shape and is the inverse of [`fmt::Display`]
/// for any identifier produced by an [`OidGenerator`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Oid {
    root: IdRoot,
    timestamp: NaiveDateTime,
    seed: u64,
}

impl Oid {
    /// Returns the identifier root this id was issued under.
    pub fn root(&self) -> &IdRoot {
        &self.root
    }

    /// Local timestamp of generation, truncated to milliseconds when parsed.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the counter value that makes this id unique within its generator.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl fmt::Display for Oid {
    /// Formats as `<root>.<timestamp>.<seed>` with the 17-digit timestamp.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.root,
            oid_timestamp(self.timestamp),
            self.seed
        )
    }
}

impl FromStr for Oid {
    type Err = IdError;

    /// Parses `<root>.<timestamp>.<seed>`.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if any part is missing, the timestamp is not 17 digits
    /// naming a real date and time, the seed is not a decimal `u64`, or the root is not
    /// dotted-decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, '.');
        let (Some(seed_str), Some(ts_str), Some(root_str)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(IdError::InvalidInput(format!(
                "Invalid identifier format: '{}'",
                s
            )));
        };

        if seed_str.is_empty() || !seed_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::InvalidInput(format!(
                "Invalid identifier seed: '{}'",
                seed_str
            )));
        }
        let seed = seed_str.parse::<u64>().map_err(|e| {
            IdError::InvalidInput(format!("Invalid identifier seed '{}': {}", seed_str, e))
        })?;

        let timestamp = parse_oid_timestamp(ts_str)?;
        let root = IdRoot::parse(root_str)?;

        Ok(Self {
            root,
            timestamp,
            seed,
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Oid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Oid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Oid::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Issues [`Oid`]s under a fixed root with a strictly increasing seed.
///
/// The counter is an atomic, so a generator can be shared between threads and every call still
/// receives a distinct seed. The counter wraps on `u64` overflow.
#[derive(Debug)]
pub struct OidGenerator {
    root: IdRoot,
    initial_seed: Seed,
    next_seed: AtomicU64,
}

impl Default for OidGenerator {
    fn default() -> Self {
        Self::new(IdRoot::default())
    }
}

impl OidGenerator {
    /// Creates a generator seeded from the current clock.
    ///
    /// The seed is the first [`SEED_DIGITS`] digits of the clock's sub-second nanoseconds.
    ///
    /// # Arguments
    ///
    /// * `root` - Root prefixed to every identifier.
    pub fn new(root: IdRoot) -> Self {
        Self::with_seed(root, Seed::from_clock(SEED_DIGITS))
    }

    /// Creates a generator whose first identifier uses `seed`.
    ///
    /// Useful when the starting value must be reproducible, for example in tests or when
    /// resuming from a recorded seed.
    pub fn with_seed(root: IdRoot, seed: Seed) -> Self {
        Self {
            root,
            initial_seed: seed,
            next_seed: AtomicU64::new(seed.value()),
        }
    }

    /// Returns the root prefixed to every identifier.
    pub fn root(&self) -> &IdRoot {
        &self.root
    }

    /// The seed this generator started from.
    pub fn initial_seed(&self) -> Seed {
        self.initial_seed
    }

    /// Generates an identifier stamped with the current local time.
    pub fn next_id(&self) -> Oid {
        self.next_id_at(Local::now().naive_local())
    }

    /// Generates an identifier stamped with `at`, consuming one seed value.
    ///
    /// # Arguments
    ///
    /// * `at` - Local time to embed. Truncated to whole milliseconds.
    ///
    /// # Returns
    ///
    /// A new [`Oid`] whose seed is one greater than the previous call's.
    pub fn next_id_at(&self, at: NaiveDateTime) -> Oid {
        let seed = self.next_seed.fetch_add(1, Ordering::Relaxed);
        let timestamp = at
            .with_nanosecond(at.nanosecond() / 1_000_000 * 1_000_000)
            .unwrap_or(at);

        Oid {
            root: self.root.clone(),
            timestamp,
            seed,
        }
    }

    /// Generates an identifier and renders it as a string.
    pub fn new_id(&self) -> String {
        self.next_id().to_string()
    }
}
