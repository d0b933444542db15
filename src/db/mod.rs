//! Database module: models and schema for the read-only listing store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows plus the request filter shapes
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the storage gateway executing the listing queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{
    Patient, PatientFilter, Pharmacy, PharmacyFilter, TransactionFilter, TransactionRecord,
};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, Storage};
