use crate::{document::Document, error::StorageError};

pub trait Storage {
  fn load(&mut self) -> Result<Document, StorageError>;
  fn save(&mut self, document: &Document) -> Result<(), StorageError>;
}
