//! Last-entered form values, kept between runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

pub const BIRTH_DATE_KEY: &str = "pet-birthdate";
pub const CATEGORY_KEY: &str = "pet-weight-category";

/// Minimal string key/value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat JSON object on disk, rewritten whole on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens `path`. A missing or unparseable file starts an empty store;
    /// the next `set` overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences from {}", path.display()))?;
            serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "ignoring malformed preferences file");
                BTreeMap::new()
            })
        } else {
            debug!(path = %path.display(), "no preferences file yet");
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// The two remembered form fields. Either may be missing independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub birth_date: Option<String>,
    pub category: Option<String>,
}

impl Preferences {
    pub fn load(store: &dyn PreferenceStore) -> Result<Self> {
        Ok(Self {
            birth_date: store.get(BIRTH_DATE_KEY)?,
            category: store.get(CATEGORY_KEY)?,
        })
    }

    pub fn save(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        if let Some(birth_date) = &self.birth_date {
            store.set(BIRTH_DATE_KEY, birth_date)?;
        }
        if let Some(category) = &self.category {
            store.set(CATEGORY_KEY, category)?;
        }
        Ok(())
    }

    pub fn is_first_use(&self) -> bool {
        self.birth_date.is_none()
    }
}
