pub mod file_service;
pub mod navigation;
pub mod storage;

pub use navigation::{HistoryNavigator, Navigator};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
