//! Persisted flip statistics
//!
//! Counters live as string-encoded integers in a small key-value TOML file
//! (`stats.toml` under the data dir). Every mutation is written back
//! immediately; there is no batching and no cross-key atomicity. Malformed
//! or missing values always coerce to 0 -- loading never fails.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use coinflip_core::prelude::*;
use coinflip_core::{Outcome, StatisticsRecord};
use fs2::FileExt;

/// File name for the persisted counters, under the data dir
pub const STATS_FILENAME: &str = "stats.toml";

/// Minimal key-value persistence seam
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────
// Typed storage keys
// ─────────────────────────────────────────────────────────────────

/// Typed counter keys -- no dynamic string-keyed access anywhere else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKey {
    Heads,
    Tails,
    Edge,
}

impl StatKey {
    pub const ALL: [StatKey; 3] = [StatKey::Heads, StatKey::Tails, StatKey::Edge];

    /// The storage key this counter persists under
    pub fn storage_key(self) -> &'static str {
        match self {
            StatKey::Heads => "coin-flip-heads-count",
            StatKey::Tails => "coin-flip-tails-count",
            StatKey::Edge => "coin-flip-edge-count",
        }
    }

    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Heads => StatKey::Heads,
            Outcome::Tails => StatKey::Tails,
            Outcome::Edge => StatKey::Edge,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// File-backed key-value store
// ─────────────────────────────────────────────────────────────────

/// TOML-file key-value store.
///
/// The full table is held in memory and rewritten on every `set` under an
/// exclusive file lock, so a crash can lose at most the write in progress.
pub struct FileKvStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileKvStore {
    /// Open (or start fresh at) the given path. Unreadable or unparsable
    /// content is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => parse_kv_table(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    fn write_back(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::storage(format!("Failed to create data dir: {}", e)))?;
        }

        let mut content = String::from("# Coinflip statistics\n");
        for (key, value) in &self.values {
            content.push_str(&format!("{} = \"{}\"\n", key, value));
        }

        // Exclusive lock for concurrent write protection
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::storage(format!("Failed to open {:?}: {}", self.path, e)))?;
        file.lock_exclusive()
            .map_err(|e| Error::storage(format!("Failed to lock {:?}: {}", self.path, e)))?;

        use std::io::Write;
        let mut file = file;
        file.write_all(content.as_bytes())
            .map_err(|e| Error::storage(format!("Failed to write {:?}: {}", self.path, e)))?;
        file.flush()
            .map_err(|e| Error::storage(format!("Failed to flush {:?}: {}", self.path, e)))?;

        // Lock released when file is dropped
        Ok(())
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.write_back()
    }
}

/// Parse a TOML table of counters, tolerating hand-edited integer values
fn parse_kv_table(content: &str, path: &Path) -> BTreeMap<String, String> {
    let table: toml::Table = match content.parse() {
        Ok(table) => table,
        Err(e) => {
            warn!("Failed to parse {:?}: {}", path, e);
            return BTreeMap::new();
        }
    };

    let mut values = BTreeMap::new();
    for (key, value) in table {
        match value {
            toml::Value::String(s) => {
                values.insert(key, s);
            }
            toml::Value::Integer(i) => {
                values.insert(key, i.to_string());
            }
            other => {
                warn!("Ignoring non-scalar value for {:?} in {:?}: {}", key, path, other);
            }
        }
    }
    values
}

// ─────────────────────────────────────────────────────────────────
// Statistics store
// ─────────────────────────────────────────────────────────────────

/// Durable counters surviving restarts, layered over a [`KvStore`].
///
/// None of these operations fail in the error-return sense: unparsable
/// values coerce to 0 and write failures are logged, never propagated.
/// The counters are advisory, not consistency-critical.
pub struct StatsStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> StatsStore<S> {
    pub fn new(kv: S) -> Self {
        // The key table is static; a collision here is a programming error
        // caught at startup rather than a corrupted counter later.
        debug_assert!(
            StatKey::ALL
                .iter()
                .all(|a| StatKey::ALL.iter().filter(|b| b.storage_key() == a.storage_key()).count() == 1),
            "duplicate storage keys"
        );
        Self { kv }
    }

    /// Read all three counters, coercing absent or non-numeric values to 0
    pub fn load(&self) -> StatisticsRecord {
        StatisticsRecord {
            heads: self.read(StatKey::Heads),
            tails: self.read(StatKey::Tails),
            edge: self.read(StatKey::Edge),
        }
    }

    /// Add 1 to the counter for `outcome` and persist immediately.
    /// Returns the new value.
    pub fn increment(&mut self, outcome: Outcome) -> u64 {
        let key = StatKey::for_outcome(outcome);
        let next = self.read(key) + 1;
        self.write(key, next);
        next
    }

    /// Write 0 to all three counters. Three independent writes; a crash
    /// mid-reset can leave a partial reset, which is acceptable here.
    pub fn reset(&mut self) {
        for key in StatKey::ALL {
            self.write(key, 0);
        }
    }

    fn read(&self, key: StatKey) -> u64 {
        match self.kv.get(key.storage_key()) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Non-numeric value for {}: {:?}, using 0", key.storage_key(), raw);
                0
            }),
            None => 0,
        }
    }

    fn write(&mut self, key: StatKey, value: u64) {
        if let Err(e) = self.kv.set(key.storage_key(), &value.to_string()) {
            warn!("Failed to persist {}: {}", key.storage_key(), e);
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Test support
// ─────────────────────────────────────────────────────────────────

/// In-memory store for engine and handler tests
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryKvStore {
    values: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemoryKvStore {
    pub(crate) fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            values: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
