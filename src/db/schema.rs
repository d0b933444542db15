//! SQL DDL for initializing the listing store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `uuid` TEXT PRIMARY KEY on all three tables
/// - `date_of_birth` stored as TEXT (`YYYY-MM-DD`)
/// - `timestamp` stored as TEXT (ISO 8601)
/// - `amount` INTEGER, minor currency units
/// - Indexes on both transaction foreign-key columns for the join
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS patients (
    uuid TEXT PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    date_of_birth TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS pharmacies (
    uuid TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    city TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS transactions (
    uuid TEXT PRIMARY KEY,
    patient_uuid TEXT NOT NULL,
    pharmacy_uuid TEXT NOT NULL,
    amount INTEGER NOT NULL,
    timestamp TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_transactions_patient_uuid ON transactions(patient_uuid);
CREATE INDEX IF NOT EXISTS idx_transactions_pharmacy_uuid ON transactions(pharmacy_uuid);
"#;
