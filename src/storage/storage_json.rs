use log::debug;

use crate::{document::Document, error::StorageError};

use super::storage::Storage;

pub struct JsonStorage {
  filepath: std::path::PathBuf,
}

impl JsonStorage {
  pub fn new(filepath: &str) -> Self {
    Self {
      filepath: std::path::PathBuf::from(filepath),
    }
  }

  pub fn storage_path(&self) -> &std::path::Path {
    self.filepath.as_path()
  }

  fn path_string(&self) -> String {
    self.filepath.to_string_lossy().into_owned()
  }
}

impl Storage for JsonStorage {
  fn load(&mut self) -> Result<Document, StorageError> {
    // a missing file is a fresh start, not a failure
    if !self.filepath.exists() {
      debug!("no tasks file at {}, starting empty", self.filepath.display());
      return Ok(Document::default());
    }

    let raw = std::fs::read_to_string(&self.filepath).map_err(|err| StorageError::Read {
      path: self.path_string(),
      source: err,
    })?;

    let document: Document =
      serde_json::from_str(raw.as_str()).map_err(|err| StorageError::Malformed {
        path: self.path_string(),
        source: err,
      })?;

    debug!(
      "restored {} tasks from: {}",
      document.tasks.len(),
      self.filepath.display()
    );

    return Ok(document);
  }

  fn save(&mut self, document: &Document) -> Result<(), StorageError> {
    let serialized = serde_json::to_string_pretty(document)
      .map_err(|err| StorageError::Serialize { source: err })?;

    std::fs::write(&self.filepath, serialized).map_err(|err| StorageError::Write {
      path: self.path_string(),
      source: err,
    })?;

    debug!(
      "flushed {} tasks to: {}",
      document.tasks.len(),
      self.filepath.display()
    );

    Ok(())
  }
}
