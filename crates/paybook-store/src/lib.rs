//! JSON file persistence for paybook.
//!
//! Implements the core `RecordStore` port on top of a single pretty-printed
//! JSON document. Also provides an in-memory store for tests behind the
//! `test-utils` feature.

#![deny(unsafe_code)]

pub mod factory;
pub mod setup;
pub mod stores;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export store implementations
pub use stores::JsonFileRecordStore;
#[cfg(any(test, feature = "test-utils"))]
pub use stores::MemoryRecordStore;

// Re-export setup function for convenient access
pub use setup::setup_store;
