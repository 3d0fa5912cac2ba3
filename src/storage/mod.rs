pub mod keys;
mod kv;

pub use kv::{JsonFileStore, KeyValueStore, KeyValueStoreExt, MemoryStore, StorageError};
