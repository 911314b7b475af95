//! Deterministic record fixtures.
//!
//! Tests never want the random score/salary the CRUD layer generates, so the
//! builder fills every field with a stable value and `sample_records` cycles
//! the fixed vocabularies instead of rolling dice.

use bookmeza_types::{CITIES, DEPARTMENTS, FIRST_NAMES, LAST_NAMES, Record, STATUSES};

/// Fluent builder around [`Record`] with sensible defaults.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: Record,
}

/// Start a builder for a record with the given identifier.
pub fn record(id: i64) -> RecordBuilder {
    RecordBuilder {
        record: Record {
            id,
            first_name: "Ali".to_string(),
            last_name: "Veli".to_string(),
            email: format!("user{}@bookmeza.com", id),
            phone: Some("+90 555 000 00 00".to_string()),
            department: "Yazılım".to_string(),
            city: "İstanbul".to_string(),
            status: "Aktif".to_string(),
            score: 50,
            salary: 10000,
            join_date: "15.06.2022".to_string(),
            is_active: true,
            avatar: format!("https://picsum.photos/seed/{}/64/64", id),
        },
    }
}

impl RecordBuilder {
    pub fn first_name(mut self, value: &str) -> Self {
        self.record.first_name = value.to_string();
        self
    }

    pub fn last_name(mut self, value: &str) -> Self {
        self.record.last_name = value.to_string();
        self
    }

    pub fn email(mut self, value: &str) -> Self {
        self.record.email = value.to_string();
        self
    }

    pub fn phone(mut self, value: Option<&str>) -> Self {
        self.record.phone = value.map(str::to_string);
        self
    }

    pub fn department(mut self, value: &str) -> Self {
        self.record.department = value.to_string();
        self
    }

    pub fn city(mut self, value: &str) -> Self {
        self.record.city = value.to_string();
        self
    }

    /// Sets the status and keeps the derived active flag consistent.
    pub fn status(mut self, value: &str) -> Self {
        self.record.status = value.to_string();
        self.record.is_active = Record::derive_is_active(value);
        self
    }

    pub fn score(mut self, value: u32) -> Self {
        self.record.score = value;
        self
    }

    pub fn salary(mut self, value: u64) -> Self {
        self.record.salary = value;
        self
    }

    pub fn join_date(mut self, value: &str) -> Self {
        self.record.join_date = value.to_string();
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

/// Deterministic stand-in for the demo data generator: identifiers start at
/// 1 and every field cycles its vocabulary, so assertions can rely on exact
/// contents.
pub fn sample_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let id = (i + 1) as i64;
            record(id)
                .first_name(FIRST_NAMES[i % FIRST_NAMES.len()])
                .last_name(LAST_NAMES[i % LAST_NAMES.len()])
                .department(DEPARTMENTS[i % DEPARTMENTS.len()])
                .city(CITIES[i % CITIES.len()])
                .status(STATUSES[i % STATUSES.len()])
                .score(((i * 7) % 100) as u32)
                .salary(5000 + ((i as u64 * 997) % 10000))
                .build()
        })
        .collect()
}
