//! Code system lookup table.
//!
//! A code system maps coded values (for example `"PAT"` or an SNOMED code) to the display text
//! used when rendering workflow documents. The table is loaded from a flat JSON object:
//!
//! ```json
//! { "PAT": "Patient", "394802001": "General medicine" }
//! ```
//!
//! Lookups never fail. An unmapped code renders as itself, so a missing entry degrades the output
//! instead of breaking it. Callers cannot tell a miss from an entry that maps a code to itself.
//!
//! The table is replaced wholesale on every load or [`CodeSystem::set`]. Readers hold an `Arc` to
//! the table they started with, so a concurrent replace is never observed half-done.

use crate::{TukError, TukResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct CodeSystem {
    entries: RwLock<Arc<HashMap<String, String>>>,
}

impl CodeSystem {
    /// Creates an empty code system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a code system populated from `entries`.
    pub fn from_map(entries: HashMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(Arc::new(entries)),
        }
    }

    /// Loads `path` and replaces the table with its contents.
    ///
    /// Returns the number of entries loaded.
    ///
    /// # Errors
    ///
    /// - [`TukError::FileRead`] if the file cannot be opened or read.
    /// - [`TukError::Deserialization`] if the content is not a flat JSON object of strings.
    ///
    /// On error the current table is left untouched.
    pub fn load(&self, path: &Path) -> TukResult<usize> {
        let entries = read_code_system_file(path).inspect_err(|e| {
            tracing::warn!("failed to load code system: {}", e);
        })?;

        let count = entries.len();
        self.set(entries);
        tracing::info!("Loaded {} code system key values from {}", count, path.display());
        Ok(count)
    }

    /// Replaces the whole table.
    pub fn set(&self, entries: HashMap<String, String>) {
        let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(entries);
    }

    /// Returns the display value for `key`, or `key` itself when unmapped.
    pub fn lookup(&self, key: &str) -> String {
        self.snapshot()
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }

    /// Returns the mapped value only when `key` is present.
    pub fn get(&self, key: &str) -> Option<String> {
        self.snapshot().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.snapshot().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// The table as of now. Later replacements do not affect the returned map.
    pub fn snapshot(&self) -> Arc<HashMap<String, String>> {
        let guard = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }
}

fn read_code_system_file(path: &Path) -> TukResult<HashMap<String, String>> {
    let file = File::open(path).map_err(|source| TukError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            TukError::FileRead {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            TukError::Deserialization {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let cs = CodeSystem::from_map(table(&[("A", "Alpha")]));

        assert_eq!(cs.lookup("A"), "Alpha");
        assert_eq!(cs.lookup("B"), "B");
    }

    #[test]
    fn test_empty_table_echoes_keys() {
        let cs = CodeSystem::new();

        assert!(cs.is_empty());
        assert_eq!(cs.lookup("anything"), "anything");
        assert_eq!(cs.lookup(""), "");
        assert_eq!(cs.get("anything"), None);
    }

    #[test]
    fn test_load_replaces_table() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "codesystem.json", r#"{"X":"Y","Z":"W"}"#);
        let cs = CodeSystem::from_map(table(&[("A", "Alpha")]));

        let count = cs.load(&path).unwrap();

        assert_eq!(count, 2);
        assert_eq!(cs.len(), 2);
        assert_eq!(cs.lookup("X"), "Y");
        assert_eq!(cs.lookup("Z"), "W");
        assert!(!cs.contains_key("A"));
        assert_eq!(cs.lookup("A"), "A");
    }

    #[test]
    fn test_load_missing_file_keeps_table() {
        let dir = TempDir::new().unwrap();
        let cs = CodeSystem::from_map(table(&[("A", "Alpha")]));

        let result = cs.load(&dir.path().join("missing.json"));

        match result {
            Err(TukError::FileRead { path, .. }) => assert!(path.ends_with("missing.json")),
            other => panic!("Expected FileRead error, got {:?}", other),
        }
        assert_eq!(cs.lookup("A"), "Alpha");
        assert_eq!(cs.len(), 1);
    }

    #[test]
    fn test_load_malformed_json_keeps_table() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "broken.json", r#"{"X": "Y""#);
        let cs = CodeSystem::from_map(table(&[("A", "Alpha")]));

        let result = cs.load(&path);

        assert!(matches!(result, Err(TukError::Deserialization { .. })));
        assert_eq!(cs.lookup("A"), "Alpha");
    }

    #[test]
    fn test_load_rejects_nested_values() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "nested.json", r#"{"X": {"Y": "Z"}}"#);
        let cs = CodeSystem::new();

        assert!(matches!(
            cs.load(&path),
            Err(TukError::Deserialization { .. })
        ));
        assert!(cs.is_empty());
    }

    #[test]
    fn test_load_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "array.json", r#"["X", "Y"]"#);

        assert!(matches!(
            CodeSystem::new().load(&path),
            Err(TukError::Deserialization { .. })
        ));
    }

    #[test]
    fn test_load_empty_object() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.json", "{}");
        let cs = CodeSystem::from_map(table(&[("A", "Alpha")]));

        assert_eq!(cs.load(&path).unwrap(), 0);
        assert!(cs.is_empty());
    }

    #[test]
    fn test_set_replaces_table() {
        let cs = CodeSystem::from_map(table(&[("A", "Alpha")]));

        cs.set(table(&[("B", "Beta")]));

        assert_eq!(cs.lookup("A"), "A");
        assert_eq!(cs.lookup("B"), "Beta");
    }

    #[test]
    fn test_snapshot_is_unaffected_by_replace() {
        let cs = CodeSystem::from_map(table(&[("A", "Alpha")]));
        let before = cs.snapshot();

        cs.set(HashMap::new());

        assert_eq!(before.get("A").map(String::as_str), Some("Alpha"));
        assert!(cs.is_empty());
    }
}
