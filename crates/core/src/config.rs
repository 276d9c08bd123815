//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into [`crate::TukContext`].
//! Helpers never read environment variables themselves.

use crate::TukResult;
use std::path::{Path, PathBuf};
use tuk_id::IdRoot;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    codesystem_file: Option<PathBuf>,
    id_root: IdRoot,
}

impl CoreConfig {
    pub fn new(codesystem_file: Option<PathBuf>, id_root: IdRoot) -> Self {
        Self {
            codesystem_file,
            id_root,
        }
    }

    /// Builds a configuration from raw (typically environment) values.
    ///
    /// Missing or blank values fall back to defaults: no code system file and the default root.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TukError::Id`] if `id_root` is set but not dotted-decimal.
    pub fn from_env_values(
        codesystem_file: Option<String>,
        id_root: Option<String>,
    ) -> TukResult<Self> {
        let codesystem_file = non_blank(codesystem_file).map(PathBuf::from);
        let id_root = non_blank(id_root)
            .map(|v| IdRoot::parse(&v))
            .transpose()?
            .unwrap_or_default();

        Ok(Self::new(codesystem_file, id_root))
    }

    pub fn codesystem_file(&self) -> Option<&Path> {
        self.codesystem_file.as_deref()
    }

    pub fn id_root(&self) -> &IdRoot {
        &self.id_root
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
