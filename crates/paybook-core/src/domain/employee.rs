//! Employee domain types.
//!
//! These types represent employees in the system, independent of any
//! infrastructure concerns. Descriptive data that payroll does not govern
//! (profile image, gender, start date, notes, and any key a caller invents)
//! lives in [`EmployeeRecord::attributes`] and is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Well-known pass-through attribute keys as they appear in the stored JSON.
pub mod attribute_keys {
    pub const PROFILE_IMAGE: &str = "profileImage";
    pub const GENDER: &str = "gender";
    pub const START_DATE: &str = "startDate";
    pub const NOTES: &str = "notes";
}

/// Keys owned by the record itself or by the derived payroll view.
///
/// An attribute with one of these names would collide with a typed field
/// when serialized, so they are never accepted as attributes.
const RESERVED_KEYS: [&str; 6] = ["id", "name", "department", "basicSalary", "tax", "netSalary"];

/// Whether `key` names a typed field rather than a pass-through attribute.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

// ─────────────────────────────────────────────────────────────────────────────
// Identifier
// ─────────────────────────────────────────────────────────────────────────────

/// Identifier of an employee record.
///
/// Assigned once at creation time and never reassigned. Serialized as a bare
/// JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Persisted record
// ─────────────────────────────────────────────────────────────────────────────

/// An employee as persisted by a `RecordStore`.
///
/// Stored records always satisfy: `basic_salary > 0`, and `name` and
/// `department` are non-empty after trimming. Use `EmployeeInput` for data
/// that has not been validated yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Unique identifier within the collection.
    pub id: EmployeeId,
    /// Employee's display name (trimmed).
    pub name: String,
    /// Department the employee belongs to (trimmed).
    pub department: String,
    /// Gross monthly compensation before deductions.
    pub basic_salary: f64,
    /// Opaque pass-through fields, stored verbatim next to the typed ones.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl EmployeeRecord {
    /// Create a record without any pass-through attributes.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        basic_salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            basic_salary,
            attributes: Map::new(),
        }
    }

    /// Read a pass-through attribute as text.
    ///
    /// Returns `None` when the attribute is absent or not a JSON string.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Set or clear a pass-through attribute.
    ///
    /// Returns `false` (and changes nothing) when `key` is reserved.
    pub fn set_attribute(&mut self, key: &str, value: Option<Value>) -> bool {
        if is_reserved_key(key) {
            return false;
        }
        match value {
            Some(value) => {
                self.attributes.insert(key.to_string(), value);
            }
            None => {
                self.attributes.remove(key);
            }
        }
        true
    }

    /// Remove attributes whose keys are reserved, returning the removed keys.
    ///
    /// Stored documents may carry derived fields such as `tax`; deserialization
    /// routes those into the attribute map, where they would shadow the
    /// computed values.
    pub fn strip_reserved_attributes(&mut self) -> Vec<String> {
        let reserved: Vec<String> = self
            .attributes
            .keys()
            .filter(|key| is_reserved_key(key))
            .cloned()
            .collect();
        for key in &reserved {
            self.attributes.remove(key);
        }
        reserved
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Caller input
// ─────────────────────────────────────────────────────────────────────────────

/// Raw, untrimmed input for creating an employee.
///
/// Mirrors what a form submission carries: every field may be missing and the
/// salary is still text. Validation happens in `crate::validation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub name: Option<String>,
    pub department: Option<String>,
    pub basic_salary: Option<String>,
    /// Pass-through attributes to store with the new record.
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl EmployeeInput {
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        basic_salary: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            department: Some(department.into()),
            basic_salary: Some(basic_salary.into()),
            attributes: Map::new(),
        }
    }

    /// Attach a pass-through attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }
}

/// Partial employee update.
///
/// Typed fields are `None` when unchanged. Attribute entries follow the
/// `Option<Option<T>>` convention flattened into a map:
/// - key absent = don't change this attribute
/// - `None` = remove the attribute
/// - `Some(value)` = set the attribute to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub department: Option<String>,
    pub basic_salary: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, Option<Value>>,
}

impl EmployeeUpdate {
    /// Whether applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.basic_salary.is_none()
            && self.attributes.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived payroll view
// ─────────────────────────────────────────────────────────────────────────────

/// An employee together with derived payroll figures.
///
/// Built by `crate::payroll::enrich_with_payroll`; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWithPayroll {
    #[serde(flatten)]
    pub record: EmployeeRecord,
    /// `basic_salary * TAX_RATE`.
    pub tax: f64,
    /// `basic_salary - tax`.
    pub net_salary: f64,
}

impl EmployeeWithPayroll {
    pub const fn id(&self) -> EmployeeId {
        self.record.id
    }
}
