use serde::{Deserialize, Serialize};

use crate::constants::STATUS_ACTIVE;

/// One entity row in the grid (an employee in the reference dataset).
///
/// Records are plain data: the collection is owned by the host application
/// and every derivation (search, sort, export) produces new structures
/// instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier, assigned once at creation and never reassigned.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub department: String,
    pub city: String,
    pub status: String,
    /// Nominal range 0-100; not clamped by the core.
    pub score: u32,
    pub salary: u64,
    /// Pre-formatted `dd.MM.yyyy` string, fixed to the tr-TR locale at
    /// record-creation time. Never re-parsed.
    pub join_date: String,
    /// Always `status == "Aktif"`. Derived on every mutation path.
    pub is_active: bool,
    pub avatar: String,
}

impl Record {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The activity flag is a function of status, nothing else.
    pub fn derive_is_active(status: &str) -> bool {
        status == STATUS_ACTIVE
    }

    /// Raw value of a direct attribute, typed for comparison and formatting.
    pub fn value(&self, field: Field) -> Value {
        match field {
            Field::Id => Value::Int(self.id),
            Field::FirstName => Value::Str(self.first_name.clone()),
            Field::LastName => Value::Str(self.last_name.clone()),
            Field::Email => Value::Str(self.email.clone()),
            Field::Phone => Value::Str(self.phone.clone().unwrap_or_default()),
            Field::Department => Value::Str(self.department.clone()),
            Field::City => Value::Str(self.city.clone()),
            Field::Status => Value::Str(self.status.clone()),
            Field::Score => Value::UInt(u64::from(self.score)),
            Field::Salary => Value::UInt(self.salary),
            Field::JoinDate => Value::Str(self.join_date.clone()),
            Field::IsActive => Value::Bool(self.is_active),
            Field::Avatar => Value::Str(self.avatar.clone()),
        }
    }
}

/// Direct record attributes, addressable by column configuration, filters
/// and export selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    City,
    Status,
    Score,
    Salary,
    JoinDate,
    IsActive,
    Avatar,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Id,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Department,
        Field::City,
        Field::Status,
        Field::Score,
        Field::Salary,
        Field::JoinDate,
        Field::IsActive,
        Field::Avatar,
    ];

    /// Wire key, matching the record's serialized attribute names.
    pub fn key(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Department => "department",
            Field::City => "city",
            Field::Status => "status",
            Field::Score => "score",
            Field::Salary => "salary",
            Field::JoinDate => "joinDate",
            Field::IsActive => "isActive",
            Field::Avatar => "avatar",
        }
    }
}

/// Typed raw value of a record attribute.
///
/// Comparison semantics live in the engine; this is just the carrier between
/// the record model and the pipeline/formatter layers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Str(String),
    Bool(bool),
}

impl Value {
    /// String coercion, the default rendering for untyped columns and the
    /// haystack for search and filter matching.
    pub fn as_text(&self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::UInt(n) => n.to_string(),
            Value::Str(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_text())
    }
}
