use super::DataStore;
use crate::book::AddressBook;
use crate::error::{ContactzError, Result};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    contacts: &'a [Record],
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Reads a snapshot. `Ok(None)` when the file does not exist.
pub(crate) fn read_book(path: &Path) -> Result<Option<AddressBook>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no store file, starting empty");
            return Ok(None);
        }
        Err(e) => return Err(ContactzError::FileAccess(e)),
    };
    let snapshot: Snapshot = serde_json::from_str(&content)?;
    Ok(Some(snapshot.contacts.into_iter().collect()))
}

pub(crate) fn write_book(path: &Path, book: &AddressBook) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let snapshot = SnapshotRef {
        contacts: book.records(),
    };
    let content = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, content)?;
    debug!(path = %path.display(), contacts = book.len(), "address book saved");
    Ok(())
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        AddressBook::load(&self.path)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        book.save(&self.path)
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Birthday;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("address_book.json"));
        (dir, store)
    }

    fn sample_book() -> AddressBook {
        let mut alice = Record::new("Alice", None).unwrap();
        alice.add_phone("1234567890").unwrap();
        alice.add_phone("0987654321").unwrap();
        let bob = Record::new("Bob", Some(Birthday::from_ymd(1985, 12, 3).unwrap())).unwrap();
        vec![alice, bob].into_iter().collect()
    }

    #[test]
    fn load_without_file_is_empty() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_dirs() {
        let (_dir, mut store) = setup();
        store.save(&sample_book()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn roundtrip_preserves_order_phones_and_birthdays() {
        let (_dir, mut store) = setup();
        let book = sample_book();
        store.save(&book).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, book);
        let names: Vec<&str> = loaded.names().collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn on_disk_layout() {
        let (_dir, mut store) = setup();
        store.save(&sample_book()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["contacts"][0]["name"], "Alice");
        assert_eq!(json["contacts"][0]["phones"][1], "0987654321");
        assert_eq!(json["contacts"][1]["birthday"], "1985-12-03");
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let (_dir, mut store) = setup();
        store.save(&AddressBook::new()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(ContactzError::Serialization(_))
        ));
    }

    #[test]
    fn invalid_phone_on_disk_is_rejected() {
        let (_dir, mut store) = setup();
        store.save(&AddressBook::new()).unwrap();
        fs::write(
            store.path(),
            r#"{"contacts":[{"name":"Eve","phones":["12"],"birthday":null}]}"#,
        )
        .unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn directory_in_place_of_file_is_file_access_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(store.load(), Err(ContactzError::FileAccess(_))));
    }
}
