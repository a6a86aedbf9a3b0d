//! Bundled web UI assets
//!
//! Everything under `assets/` is compiled into the binary and exposed as a
//! read-only map from relative path to bytes.

use bytes::Bytes;
use include_dir::{Dir, include_dir};
use std::collections::HashMap;

// Include the web UI directory at compile time
static BUNDLED_ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Read-only path -> content map served by the asset server
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    entries: HashMap<String, Bytes>,
}

impl AssetStore {
    /// Store holding the assets embedded at build time
    pub fn bundled() -> Self {
        let mut entries = HashMap::new();
        collect_dir(&BUNDLED_ASSETS, &mut entries);
        log::debug!("Loaded {} bundled assets", entries.len());
        Self { entries }
    }

    /// Store built from explicit entries
    pub fn from_entries<I, P, B>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, B)>,
        P: Into<String>,
        B: Into<Bytes>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(path, contents)| (path.into(), contents.into()))
                .collect(),
        }
    }

    /// Look up an asset by its relative path (no leading slash)
    pub fn get(&self, path: &str) -> Option<Bytes> {
        self.entries.get(path).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Relative paths of all stored assets, sorted
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

fn collect_dir(dir: &'static Dir<'static>, entries: &mut HashMap<String, Bytes>) {
    for file in dir.files() {
        let path = file.path().to_string_lossy().replace('\\', "/");
        entries.insert(path, Bytes::from_static(file.contents()));
    }
    for sub in dir.dirs() {
        collect_dir(sub, entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_store_has_index() {
        let store = AssetStore::bundled();
        assert!(store.contains("index.html"));
        assert!(store.contains("app.js"));
        assert!(store.contains("app.css"));
    }

    #[test]
    fn test_bundled_paths_are_relative() {
        let store = AssetStore::bundled();
        for path in store.paths() {
            assert!(!path.starts_with('/'), "path {} has a leading slash", path);
        }
    }

    #[test]
    fn test_from_entries_lookup() {
        let store = AssetStore::from_entries([
            ("index.html", Bytes::from_static(b"<html></html>")),
            ("js/app.js", Bytes::from_static(b"console.log(1)")),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("js/app.js").as_deref(), Some(&b"console.log(1)"[..]));
        assert!(store.get("/index.html").is_none());
        assert!(store.get("missing.css").is_none());
    }
}
