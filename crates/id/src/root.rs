use crate::{IdError, IdResult, DEFAULT_ID_ROOT};
use std::{fmt, str::FromStr};

/// A validated dotted-decimal identifier root, for example `1.2.40.0.13.1.1.3542466645`.
///
/// Every arc is a non-empty run of ASCII digits. A single trailing `.` on input is tolerated and
/// dropped, since roots are often written with the separator already attached.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdRoot(String);

impl Default for IdRoot {
    fn default() -> Self {
        Self(DEFAULT_ID_ROOT.to_owned())
    }
}

impl IdRoot {
    /// Validates and wraps a dotted-decimal root.
    ///
    /// Surrounding whitespace is ignored, which suits values read from environment files.
    ///
    /// # Arguments
    ///
    /// * `input` - Root such as `1.2.40.0.13.1.1.3542466645` or the same with a trailing `.`.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is empty or any arc is empty or non-numeric.
    pub fn parse(input: &str) -> IdResult<Self> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if Self::is_dotted_decimal(trimmed) {
            return Ok(Self(trimmed.to_owned()));
        }
        Err(IdError::InvalidInput(format!(
            "identifier root must be dotted-decimal digits, got: '{}'",
            input
        )))
    }

    /// Returns true if `input` is a non-empty sequence of digit arcs joined by single dots.
    pub fn is_dotted_decimal(input: &str) -> bool {
        !input.is_empty()
            && input
                .split('.')
                .all(|arc| !arc.is_empty() && arc.bytes().all(|b| b.is_ascii_digit()))
    }

    /// Returns the root without a trailing dot.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IdRoot {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdRoot::parse(s)
    }
}

impl AsRef<str> for IdRoot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IdRoot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IdRoot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IdRoot::parse(&s).map_err(serde::de::Error::custom)
    }
}
