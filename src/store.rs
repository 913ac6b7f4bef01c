use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{Result, SlidedeckError};

/// A key-value slot for the last shown slide.
pub trait PositionStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Keeps one file per key inside a state directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl PositionStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| SlidedeckError::io(&self.dir, e))?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| SlidedeckError::io(path, e))
    }
}

#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PositionStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Boxed stores are picked at runtime (`--no-persist`).
impl PositionStore for Box<dyn PositionStore> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_creates_state_dir_on_first_save() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("nested").join("state");
        let mut store = FileStore::new(&dir);

        assert_eq!(store.load("currentSlide"), None);
        store.save("currentSlide", "3").expect("save");

        assert!(dir.join("currentSlide").exists());
        assert_eq!(store.load("currentSlide").as_deref(), Some("3"));
    }

    #[test]
    fn file_store_overwrites_previous_value() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::new(temp.path());

        store.save("currentSlide", "12").expect("save");
        store.save("currentSlide", "4").expect("save");

        assert_eq!(store.load("currentSlide").as_deref(), Some("4"));
    }

    #[test]
    fn file_store_reports_unwritable_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("write");

        let mut store = FileStore::new(blocker.join("state"));
        let err = store.save("currentSlide", "1").unwrap_err();
        assert!(matches!(err, SlidedeckError::Io { .. }));
    }

    #[test]
    fn memory_store_keeps_keys_apart() {
        let mut store = MemoryStore::with_value("a", "1");
        store.save("b", "2").expect("save");

        assert_eq!(store.load("a").as_deref(), Some("1"));
        assert_eq!(store.load("b").as_deref(), Some("2"));
        assert_eq!(store.load("c"), None);
    }
}
