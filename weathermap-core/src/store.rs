use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::{
    collections::HashMap,
    fmt::Debug,
    fs,
    path::PathBuf,
    sync::Mutex,
};

/// Storage key holding the search history.
pub const SEARCHES_KEY: &str = "searches";

/// Minimal key-value storage capability backing the search log.
///
/// Injected so the production file store can be swapped for an in-memory
/// store under test.
pub trait KeyValueStore: Send + Sync + Debug {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// One file per key under a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the platform data directory.
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "weathermap", "weathermap")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read store file: {}", path.display()))?;

        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create store directory: {}", self.dir.display()))?;

        let path = self.key_path(key);
        fs::write(&path, value)
            .with_context(|| format!("Failed to write store file: {}", path.display()))?;

        Ok(())
    }
}

/// Process-local store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Append-only, persisted list of every location string ever submitted.
///
/// The stored form is a single key holding a JSON-encoded array of strings.
/// Insertion order is preserved and duplicates are allowed; there is no size
/// bound and no programmatic deletion.
#[derive(Debug)]
pub struct SearchLog {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl SearchLog {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_key(store, SEARCHES_KEY)
    }

    pub fn with_key(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read the stored sequence, append `query`, write the whole sequence
    /// back. A single `set` is the only atomicity on offer; concurrent
    /// writers are last-write-wins.
    pub fn append(&self, query: &str) -> Result<()> {
        let mut searches = self.list();
        searches.push(query.to_string());

        let encoded =
            serde_json::to_string(&searches).context("Failed to encode search history")?;

        self.store.set(&self.key, &encoded)
    }

    /// The persisted sequence. Absent or malformed stored data reads as
    /// empty; this never fails.
    pub fn list(&self) -> Vec<String> {
        self.store
            .get(&self.key)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}
