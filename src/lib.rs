extern crate colored;
extern crate serde;
extern crate serde_json;

mod manager;

pub mod commands;
pub mod config;
pub mod console;
pub mod date;
pub mod document;
pub mod error;
pub mod preferences;
pub mod session;
pub mod storage;
pub mod task;
pub mod viewer;

pub use config::Config;
pub use manager::*;
