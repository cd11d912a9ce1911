#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("task title cannot be empty")]
  EmptyTitle,

  #[error("invalid date format, use YYYY-MM-DD")]
  InvalidDueDate,

  #[error("you must enter a task id or title")]
  EmptyIdentifier,

  #[error("search keyword cannot be empty")]
  EmptyKeyword,

  #[error("invalid filter option {0:?}, use all, pending or completed")]
  InvalidFilter(String),

  #[error("task not found")]
  NotFound,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
  #[error("can't read tasks file {path}: {source}")]
  Read {
    path: String,
    source: std::io::Error,
  },

  #[error("malformed tasks file {path}: {source}")]
  Malformed {
    path: String,
    source: serde_json::Error,
  },

  #[error("can't serialize tasks document: {source}")]
  Serialize { source: serde_json::Error },

  #[error("can't write tasks file {path}: {source}")]
  Write {
    path: String,
    source: std::io::Error,
  },
}
