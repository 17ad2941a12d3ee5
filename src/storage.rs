//! Persistence bridge – keyed JSON slots on disk.
//!
//! The editing front end keeps one resume snapshot under a well-known key.
//! Reads are forgiving: missing or corrupt data is logged and treated as "no
//! prior data", never surfaced to the caller as an error.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::model::ResumeData;

/// Storage key of the resume snapshot.
pub const RESUME_DATA_KEY: &str = "resumeData";

/// A directory of `<key>.json` slots.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Raw contents of a slot, `None` when the slot does not exist.
    pub fn get_item(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    pub fn set_item(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.slot_path(key), value)
    }

    pub fn remove_item(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.slot_path(key)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// Load the stored resume snapshot. A missing slot yields `None`; a slot
/// that fails to parse is logged and also yields `None`.
pub fn load_resume_data(store: &JsonStore) -> Option<ResumeData> {
    let raw = store.get_item(RESUME_DATA_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(data) => Some(data),
        Err(e) => {
            log::error!("failed to parse stored resume data: {e}");
            None
        }
    }
}

/// Persist a resume snapshot under the well-known key.
pub fn save_resume_data(store: &JsonStore, data: &ResumeData) -> io::Result<()> {
    let json = serde_json::to_string(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    store.set_item(RESUME_DATA_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Name, ResumeData};

    #[test]
    fn round_trips_a_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let mut data = ResumeData::default();
        data.general.name = Name {
            first_name: "Jon".to_string(),
            last_name: "Snow".to_string(),
            ..Name::default()
        };

        save_resume_data(&store, &data).unwrap();
        let loaded = load_resume_data(&store).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn missing_slot_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        assert!(load_resume_data(&store).is_none());
    }

    #[test]
    fn malformed_slot_yields_none_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store.set_item(RESUME_DATA_KEY, "{ not json").unwrap();
        assert!(load_resume_data(&store).is_none());
    }

    #[test]
    fn remove_item_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store.set_item(RESUME_DATA_KEY, "{}").unwrap();
        store.remove_item(RESUME_DATA_KEY).unwrap();
        store.remove_item(RESUME_DATA_KEY).unwrap();
        assert!(store.get_item(RESUME_DATA_KEY).is_none());
    }
}
