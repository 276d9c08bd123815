//! # TUK Core
//!
//! Helpers shared by the TUK XDS/XDW services:
//! - code system lookups loaded from a JSON file ([`CodeSystem`])
//! - local-time formatting ([`time`])
//! - clamped substrings and XML element extraction ([`text`])
//! - XDW key and XDS author parsing ([`xds`])
//! - named template helpers ([`template`])
//!
//! [`TukContext`] bundles the identifier generator from `tuk_id` with a code system so callers
//! pass one explicit handle around instead of relying on process globals.

pub mod codesystem;
pub mod config;
pub mod constants;
mod context;
pub mod error;
pub mod template;
pub mod text;
pub mod time;
pub mod xds;

pub use codesystem::CodeSystem;
pub use config::CoreConfig;
pub use context::TukContext;
pub use error::{TukError, TukResult};
pub use template::TemplateFunction;
pub use xds::XdwKey;

pub use tuk_id::{IdRoot, Oid, OidGenerator, Seed, SeedOrigin, UuidService};
