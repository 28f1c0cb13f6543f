//! Employee service - orchestrates employee CRUD over a `RecordStore`.
//!
//! Every operation re-reads the authoritative collection. Mutations follow
//! load, mutate, save and hold the service's write lock for that whole span,
//! so mutations issued through one service never lose each other's updates.
//! Writers in other processes are not covered; the last save wins.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{EmployeeId, EmployeeInput, EmployeeRecord, EmployeeUpdate, EmployeeWithPayroll};
use crate::ids::IdGenerator;
use crate::payroll::{PayrollSummary, enrich_with_payroll};
use crate::ports::{CoreError, RecordStore};
use crate::validation::prepare_fields;

/// Service for employee operations.
pub struct EmployeeService {
    store: Arc<dyn RecordStore>,
    ids: IdGenerator,
    write_lock: Mutex<()>,
}

impl EmployeeService {
    /// Create a new employee service over the given store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            ids: IdGenerator::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// List all employees with payroll figures, in stored order.
    pub async fn list(&self) -> Vec<EmployeeWithPayroll> {
        self.store.load_all().await.iter().map(enrich_with_payroll).collect()
    }

    /// Employees whose name or department contains `query`, ignoring case.
    pub async fn search(&self, query: &str) -> Vec<EmployeeWithPayroll> {
        let needle = query.trim().to_lowercase();
        self.store
            .load_all()
            .await
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.name.to_lowercase().contains(&needle)
                    || r.department.to_lowercase().contains(&needle)
            })
            .map(enrich_with_payroll)
            .collect()
    }

    /// Employees in `department`, ignoring case and surrounding whitespace.
    pub async fn by_department(&self, department: &str) -> Vec<EmployeeWithPayroll> {
        let wanted = department.trim().to_lowercase();
        self.store
            .load_all()
            .await
            .iter()
            .filter(|r| r.department.to_lowercase() == wanted)
            .map(enrich_with_payroll)
            .collect()
    }

    /// Get an employee by id.
    pub async fn get(&self, id: EmployeeId) -> Option<EmployeeWithPayroll> {
        self.store
            .load_all()
            .await
            .iter()
            .find(|r| r.id == id)
            .map(enrich_with_payroll)
    }

    /// Payroll totals over all stored employees.
    pub async fn summary(&self) -> PayrollSummary {
        PayrollSummary::from_records(&self.store.load_all().await)
    }

    /// Validate `input` and append a new employee.
    ///
    /// Returns the stored record with its freshly assigned id.
    pub async fn create(&self, input: EmployeeInput) -> Result<EmployeeRecord, CoreError> {
        let fields = prepare_fields(
            input.name.as_deref(),
            input.department.as_deref(),
            input.basic_salary.as_deref(),
        )?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load_all().await;

        let mut record = EmployeeRecord::new(
            self.ids.next_unused(&records),
            fields.name,
            fields.department,
            fields.basic_salary,
        );
        for (key, value) in input.attributes {
            if !record.set_attribute(&key, Some(value)) {
                warn!(key = %key, "Ignoring reserved attribute on new employee");
            }
        }

        records.push(record.clone());
        self.store.save_all(&records).await?;

        info!(id = %record.id, department = %record.department, "Created employee");
        Ok(record)
    }

    /// Apply `update` to the employee with `id`.
    ///
    /// The resulting name, department and salary are validated together.
    /// Returns `Ok(None)` when no employee has that id.
    pub async fn update(
        &self,
        id: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<Option<EmployeeRecord>, CoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load_all().await;

        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            debug!(id = %id, "Update target not found");
            return Ok(None);
        };

        let salary = update
            .basic_salary
            .clone()
            .unwrap_or_else(|| record.basic_salary.to_string());
        let fields = prepare_fields(
            Some(update.name.as_deref().unwrap_or(&record.name)),
            Some(update.department.as_deref().unwrap_or(&record.department)),
            Some(&salary),
        )?;

        record.name = fields.name;
        record.department = fields.department;
        record.basic_salary = fields.basic_salary;
        for (key, value) in update.attributes {
            if !record.set_attribute(&key, value) {
                warn!(id = %id, key = %key, "Ignoring reserved attribute in update");
            }
        }
        let updated = record.clone();

        self.store.save_all(&records).await?;

        info!(id = %id, "Updated employee");
        Ok(Some(updated))
    }

    /// Remove the employee with `id`.
    ///
    /// Returns the removed record, or `Ok(None)` when no employee has that id.
    pub async fn delete(&self, id: EmployeeId) -> Result<Option<EmployeeRecord>, CoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load_all().await;

        let Some(index) = records.iter().position(|r| r.id == id) else {
            debug!(id = %id, "Delete target not found");
            return Ok(None);
        };
        let removed = records.remove(index);

        self.store.save_all(&records).await?;

        info!(id = %id, "Deleted employee");
        Ok(Some(removed))
    }
}
