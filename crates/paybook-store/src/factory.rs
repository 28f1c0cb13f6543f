//! Composition utilities for building services over store backends.
//!
//! This module provides factory functions for wiring up the application
//! with a `RecordStore`. It is focused purely on construction and should
//! not contain any domain logic.

use std::sync::Arc;

use paybook_core::{EmployeeService, RecordStore, StoreConfig};

use crate::setup::setup_store;
use crate::stores::JsonFileRecordStore;

/// Factory for creating store-backed services.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a JSON file store for `config`, preparing its directory.
    pub fn json_file_store(config: &StoreConfig) -> anyhow::Result<Arc<JsonFileRecordStore>> {
        Ok(Arc::new(setup_store(config)?))
    }

    /// Build an `EmployeeService` over any store.
    pub fn employee_service(store: Arc<dyn RecordStore>) -> EmployeeService {
        EmployeeService::new(store)
    }

    /// Build an `EmployeeService` over the JSON file store for `config`.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let store = StoreFactory::json_file_store(&config)?;
    /// let service = StoreFactory::employee_service(store);
    /// ```
    pub fn build_employee_service(config: &StoreConfig) -> anyhow::Result<EmployeeService> {
        let store: Arc<dyn RecordStore> = Self::json_file_store(config)?;
        Ok(Self::employee_service(store))
    }
}
