use crate::error::{ContactzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 5;
const DEFAULT_STORE_FILE: &str = "address_book.json";

/// Configuration for contactz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactzConfig {
    /// Contacts per page for `show_all` / `next`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Store file name, relative to the data dir unless absolute
    #[serde(default = "default_store_file")]
    pub store_file: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_store_file() -> String {
    DEFAULT_STORE_FILE.to_string()
}

impl Default for ContactzConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            store_file: DEFAULT_STORE_FILE.to_string(),
        }
    }
}

impl ContactzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ContactzConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ContactzError::invalid("page size", "0"));
        }
        if self.store_file.trim().is_empty() {
            return Err(ContactzError::invalid("store file", ""));
        }
        Ok(())
    }

    /// Full path of the store file for a given data dir
    pub fn store_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        let file = Path::new(&self.store_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.as_ref().join(file)
        }
    }
}
