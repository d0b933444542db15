use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Patient {
    pub uuid: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Pharmacy {
    pub uuid: String,
    pub name: String,
    pub city: String,
}

/// Flattened join row for `/transactions`: patient and pharmacy fields merged
/// with the transaction's own columns. `amount` stays an integer (minor
/// currency units) end to end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct TransactionRecord {
    pub patient_uuid: String,
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub patient_date_of_birth: NaiveDate,
    pub pharmacy_uuid: String,
    pub pharmacy_name: String,
    pub pharmacy_city: String,
    pub uuid: String,
    pub amount: i64,
    pub timestamp: NaiveDateTime,
}

/// Optional equality filters for `/patients`. Every supplied field becomes one
/// conjunct; omitted fields impose no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientFilter {
    pub uuid: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl PatientFilter {
    pub fn eq_filters(&self) -> [(&'static str, Option<String>); 4] {
        [
            ("uuid", self.uuid.clone()),
            ("first_name", self.first_name.clone()),
            ("last_name", self.last_name.clone()),
            ("date_of_birth", self.date_of_birth.map(|d| d.to_string())),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PharmacyFilter {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
}

impl PharmacyFilter {
    pub fn eq_filters(&self) -> [(&'static str, Option<String>); 3] {
        [
            ("uuid", self.uuid.clone()),
            ("name", self.name.clone()),
            ("city", self.city.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionFilter {
    pub patient_uuid: Option<String>,
    pub pharmacy_uuid: Option<String>,
}

impl TransactionFilter {
    /// Columns are qualified with the transactions alias used by the join query.
    pub fn eq_filters(&self) -> [(&'static str, Option<String>); 2] {
        [
            ("t.patient_uuid", self.patient_uuid.clone()),
            ("t.pharmacy_uuid", self.pharmacy_uuid.clone()),
        ]
    }
}
