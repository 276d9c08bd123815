//! Constants used throughout the TUK core crate.

/// Number of trailing characters of an XDW key that hold the NHS number.
pub const NHS_ID_LEN: usize = 10;

/// Separator between components of HL7 composite fields (XCN, XON).
pub const HL7_COMPONENT_SEPARATOR: char = '^';

/// Environment variable naming the code system JSON file.
pub const CODESYSTEM_FILE_ENV: &str = "TUK_CODESYSTEM_FILE";

/// Environment variable overriding the identifier root.
pub const ID_ROOT_ENV: &str = "TUK_ID_ROOT";

/// Layout of [`crate::time::tuk_time`]: date, time with nanoseconds, numeric offset.
pub const TUK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f %z";

/// Zone used for human-readable times.
pub const TUK_TIME_ZONE: chrono_tz::Tz = chrono_tz::Europe::London;
