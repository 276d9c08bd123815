use crate::template::TemplateFunction;
use crate::{CodeSystem, CoreConfig, TukResult};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tuk_id::{IdRoot, OidGenerator, UuidService};

/// Shared state for the TUK helpers: one identifier generator and one code system.
///
/// Cloning is cheap and every clone sees the same counter and table, so a context can be handed
/// to each worker thread.
#[derive(Clone, Debug, Default)]
pub struct TukContext {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    ids: OidGenerator,
    codes: CodeSystem,
}

impl TukContext {
    /// Creates a context with an empty code system and a clock-seeded generator under `root`.
    pub fn new(root: IdRoot) -> Self {
        Self::with_parts(OidGenerator::new(root), CodeSystem::new())
    }

    pub fn with_parts(ids: OidGenerator, codes: CodeSystem) -> Self {
        Self {
            inner: Arc::new(Inner { ids, codes }),
        }
    }

    /// Creates a context from startup configuration, loading the code system file if one is set.
    ///
    /// # Errors
    ///
    /// Propagates [`CodeSystem::load`] errors.
    pub fn from_config(config: &CoreConfig) -> TukResult<Self> {
        let ctx = Self::new(config.id_root().clone());
        if let Some(path) = config.codesystem_file() {
            ctx.load_code_system(path)?;
        } else {
            tracing::info!("No code system file configured; lookups will echo their keys");
        }

        let seed = ctx.ids().initial_seed();
        if seed.is_defaulted() {
            tracing::warn!("Identifier seed could not be derived from the clock; starting at 0");
        }
        Ok(ctx)
    }

    pub fn ids(&self) -> &OidGenerator {
        &self.inner.ids
    }

    pub fn code_system(&self) -> &CodeSystem {
        &self.inner.codes
    }

    /// Issues the next dotted-decimal identifier.
    pub fn new_id(&self) -> String {
        self.inner.ids.new_id()
    }

    /// Issues a random UUID in hyphenated form.
    pub fn new_uuid(&self) -> String {
        UuidService::new().to_string()
    }

    pub fn load_code_system(&self, path: &Path) -> TukResult<usize> {
        self.inner.codes.load(path)
    }

    pub fn set_code_system(&self, entries: HashMap<String, String>) {
        self.inner.codes.set(entries)
    }

    /// Maps a code to its display value, or returns the code when unmapped.
    pub fn lookup(&self, key: &str) -> String {
        self.inner.codes.lookup(key)
    }

    /// Invokes the template function called `name` with `args`.
    ///
    /// # Errors
    ///
    /// - [`crate::TukError::UnknownFunction`] if `name` is not a template function.
    /// - [`crate::TukError::InvalidInput`] on wrong argument count.
    pub fn call(&self, name: &str, args: &[&str]) -> TukResult<String> {
        name.parse::<TemplateFunction>()?.invoke(self, args)
    }
}
