//! Leave type kinds and catalog entries.

use serde::{Deserialize, Serialize};

use super::LeaveTypeId;

/// The fixed set of leave types the engine understands.
///
/// Leave type names arriving from callers are matched case-insensitively
/// against this set via [`str::parse`].
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveTypeKind;
///
/// let kind: LeaveTypeKind = "sick".parse().unwrap();
/// assert_eq!(kind, LeaveTypeKind::Sick);
/// assert!("sabbatical".parse::<LeaveTypeKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveTypeKind {
    /// Sick leave.
    Sick,
    /// Casual leave.
    Casual,
    /// Earned (annual) leave.
    Earned,
}

impl LeaveTypeKind {
    /// All leave type kinds, in catalog bootstrap order.
    pub const ALL: [LeaveTypeKind; 3] =
        [LeaveTypeKind::Sick, LeaveTypeKind::Casual, LeaveTypeKind::Earned];
}

impl std::fmt::Display for LeaveTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveTypeKind::Sick => write!(f, "SICK"),
            LeaveTypeKind::Casual => write!(f, "CASUAL"),
            LeaveTypeKind::Earned => write!(f, "EARNED"),
        }
    }
}

/// Error returned when a string does not name a known leave type.
///
/// Carries the offending input so callers can surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLeaveTypeError(pub String);

impl std::fmt::Display for ParseLeaveTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown leave type: {}", self.0)
    }
}

impl std::error::Error for ParseLeaveTypeError {}

impl std::str::FromStr for LeaveTypeKind {
    type Err = ParseLeaveTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SICK" => Ok(LeaveTypeKind::Sick),
            "CASUAL" => Ok(LeaveTypeKind::Casual),
            "EARNED" => Ok(LeaveTypeKind::Earned),
            _ => Err(ParseLeaveTypeError(s.to_string())),
        }
    }
}

/// A provisioned leave type row in the leave type catalog.
///
/// Exactly one entry exists per [`LeaveTypeKind`]; the catalog enforces
/// this at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeEntry {
    /// Catalog identifier for this leave type.
    pub id: LeaveTypeId,
    /// The kind this entry provisions.
    pub kind: LeaveTypeKind,
}
