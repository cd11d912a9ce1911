mod storage;
mod storage_json;

pub use storage::Storage;
pub use storage_json::JsonStorage;
