//! Employee record and department types.
//!
//! Employee records are owned by the external employee directory; the
//! engine only ever references employees by id and reads records through
//! the [`crate::directory::EmployeeDirectory`] trait.

use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// The department an employee belongs to.
///
/// Departments form a closed set and drive the entitlement policy: the
/// number of leave days an employee starts with depends on their
/// department and the leave type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    /// Client consulting staff.
    Consulting,
    /// Customer support staff.
    Support,
    /// Software development staff.
    Development,
    /// Trainees; receive no earned leave entitlement.
    Trainee,
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Department::Consulting => write!(f, "CONSULTING"),
            Department::Support => write!(f, "SUPPORT"),
            Department::Development => write!(f, "DEVELOPMENT"),
            Department::Trainee => write!(f, "TRAINEE"),
        }
    }
}

/// A read-only view of an employee as held by the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// The employee's full name.
    pub name: String,
    /// The employee's email address.
    pub email: String,
    /// The department the employee belongs to.
    pub department: Department,
    /// Whether the employee is currently active.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_serialization_uses_upper_case() {
        assert_eq!(
            serde_json::to_string(&Department::Consulting).unwrap(),
            "\"CONSULTING\""
        );
        assert_eq!(
            serde_json::to_string(&Department::Trainee).unwrap(),
            "\"TRAINEE\""
        );
    }

    #[test]
    fn test_department_deserialization() {
        let dept: Department = serde_json::from_str("\"DEVELOPMENT\"").unwrap();
        assert_eq!(dept, Department::Development);
    }

    #[test]
    fn test_department_display_matches_wire_format() {
        assert_eq!(Department::Support.to_string(), "SUPPORT");
    }

    #[test]
    fn test_employee_record_round_trip() {
        let record = EmployeeRecord {
            id: 1,
            name: "Asha Rao".to_string(),
            email: "asha.rao@example.com".to_string(),
            department: Department::Development,
            active: true,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: EmployeeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
