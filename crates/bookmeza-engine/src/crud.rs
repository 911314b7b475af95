//! CRUD mediation over the record collection.
//!
//! All three operations take the prior collection and return a new one;
//! nothing is mutated in place and nothing changes when validation fails.

use chrono::{Local, Utc};
use rand::Rng;

use bookmeza_types::Record;

use crate::error::{Error, Result};

const SALARY_MIN: u64 = 5000;
const SALARY_BAND: u64 = 10000;

/// Form payload for add and update. Required fields are plain strings;
/// everything the form does not expose is optional and filled by generation
/// rules (add) or preserved from the prior record (update).
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub city: String,
    pub status: String,
    pub score: Option<u32>,
    pub salary: Option<u64>,
    pub join_date: Option<String>,
    pub avatar: Option<String>,
}

impl RecordDraft {
    fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push("firstName");
        }
        if self.last_name.trim().is_empty() {
            missing.push("lastName");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingRequiredFields(missing))
        }
    }
}

/// Append a new record built from the draft.
///
/// Assigns a millisecond-epoch identifier (unique enough for a single
/// session), derives the active flag from status, and fills absent fields
/// with the reference generation rules: random score 0-99, random salary in
/// a fixed band, today's date, placeholder avatar keyed by the identifier.
pub fn add(records: &[Record], draft: RecordDraft) -> Result<Vec<Record>> {
    draft.validate()?;

    let id = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();

    let record = Record {
        id,
        is_active: Record::derive_is_active(&draft.status),
        first_name: draft.first_name,
        last_name: draft.last_name,
        email: draft.email,
        phone: draft.phone,
        department: draft.department,
        city: draft.city,
        status: draft.status,
        score: draft.score.unwrap_or_else(|| rng.gen_range(0..100)),
        salary: draft
            .salary
            .unwrap_or_else(|| SALARY_MIN + rng.gen_range(0..SALARY_BAND)),
        join_date: draft.join_date.unwrap_or_else(today),
        avatar: draft
            .avatar
            .unwrap_or_else(|| placeholder_avatar(id)),
    };

    let mut next = records.to_vec();
    next.push(record);
    Ok(next)
}

/// Replace the record with the given identifier by the edited draft.
///
/// The identifier must exist. The active flag is re-derived from the
/// submitted status on every update, overriding any stale value; fields the
/// draft leaves unset keep their prior values.
pub fn update(records: &[Record], id: i64, draft: RecordDraft) -> Result<Vec<Record>> {
    draft.validate()?;

    let prior = records
        .iter()
        .find(|record| record.id == id)
        .ok_or(Error::UnknownRecord(id))?;

    let edited = Record {
        id,
        is_active: Record::derive_is_active(&draft.status),
        first_name: draft.first_name,
        last_name: draft.last_name,
        email: draft.email,
        phone: draft.phone.or_else(|| prior.phone.clone()),
        department: draft.department,
        city: draft.city,
        status: draft.status,
        score: draft.score.unwrap_or(prior.score),
        salary: draft.salary.unwrap_or(prior.salary),
        join_date: draft.join_date.unwrap_or_else(|| prior.join_date.clone()),
        avatar: draft.avatar.unwrap_or_else(|| prior.avatar.clone()),
    };

    Ok(records
        .iter()
        .map(|record| {
            if record.id == id {
                edited.clone()
            } else {
                record.clone()
            }
        })
        .collect())
}

/// Remove the record with the given identifier. Unknown identifiers are a
/// no-op, not an error.
pub fn remove(records: &[Record], id: i64) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.id != id)
        .cloned()
        .collect()
}

fn today() -> String {
    Local::now().format("%d.%m.%Y").to_string()
}

fn placeholder_avatar(id: i64) -> String {
    format!("https://picsum.photos/seed/{}/64/64", id)
}
