use chrono::Utc;

/// Where an initial seed value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedOrigin {
    /// Derived from the clock's sub-second nanoseconds.
    Parsed,
    /// Nothing could be parsed, so the seed fell back to zero.
    Defaulted,
    /// Supplied by the caller.
    Explicit,
}

/// The starting value of an [`crate::OidGenerator`] counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed {
    value: u64,
    origin: SeedOrigin,
}

impl Seed {
    /// A caller-chosen seed, marked [`SeedOrigin::Explicit`].
    pub fn explicit(value: u64) -> Self {
        Self {
            value,
            origin: SeedOrigin::Explicit,
        }
    }

    /// Takes the first `digits` decimal digits of `nanos` as the seed.
    ///
    /// `nanos` is rendered without padding, so `4_500` with five digits yields `4500`.
    /// When no digit is available (`digits == 0`) the seed is zero and marked
    /// [`SeedOrigin::Defaulted`].
    pub fn from_subsec_nanos(nanos: u32, digits: usize) -> Self {
        let leading: String = nanos.to_string().chars().take(digits).collect();

        match leading.parse::<u64>() {
            Ok(value) => Self {
                value,
                origin: SeedOrigin::Parsed,
            },
            Err(_) => Self {
                value: 0,
                origin: SeedOrigin::Defaulted,
            },
        }
    }

    /// Seeds from the current clock.
    ///
    /// # Arguments
    ///
    /// * `digits` - How many leading digits of the sub-second nanoseconds to keep.
    pub fn from_clock(digits: usize) -> Self {
        Self::from_subsec_nanos(Utc::now().timestamp_subsec_nanos(), digits)
    }

    /// Returns the numeric seed value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns how the value was obtained.
    pub fn origin(&self) -> SeedOrigin {
        self.origin
    }

    /// True when the seed is the zero fallback rather than a parsed value.
    pub fn is_defaulted(&self) -> bool {
        self.origin == SeedOrigin::Defaulted
    }
}
