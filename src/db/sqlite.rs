use crate::db::models::{
    Patient, PatientFilter, Pharmacy, PharmacyFilter, TransactionFilter, TransactionRecord,
};
use crate::db::schema::SQLITE_INIT;
use crate::error::ApiError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, QueryBuilder, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Read-only gateway over the three listing tables. Owns the connection pool;
/// handlers borrow it through the router state.
#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and run the
    /// bundled DDL.
    pub async fn connect(database_url: &str) -> Result<Self, ApiError> {
        let connect_opts =
            SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn list_patients(&self, filter: &PatientFilter) -> Result<Vec<Patient>, ApiError> {
        let mut query = QueryBuilder::new(
            "SELECT uuid, first_name, last_name, date_of_birth FROM patients",
        );
        push_eq_filters(&mut query, filter.eq_filters());
        let rows = query
            .build_query_as::<Patient>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_pharmacies(
        &self,
        filter: &PharmacyFilter,
    ) -> Result<Vec<Pharmacy>, ApiError> {
        let mut query = QueryBuilder::new("SELECT uuid, name, city FROM pharmacies");
        push_eq_filters(&mut query, filter.eq_filters());
        let rows = query
            .build_query_as::<Pharmacy>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Inner join of transactions with their patient and pharmacy. A
    /// transaction referencing a missing patient or pharmacy never appears.
    pub async fn list_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionRecord>, ApiError> {
        let mut query = QueryBuilder::new(
            r#"SELECT
                   p.uuid AS patient_uuid,
                   p.first_name AS patient_first_name,
                   p.last_name AS patient_last_name,
                   p.date_of_birth AS patient_date_of_birth,
                   ph.uuid AS pharmacy_uuid,
                   ph.name AS pharmacy_name,
                   ph.city AS pharmacy_city,
                   t.uuid AS uuid,
                   t.amount AS amount,
                   t.timestamp AS timestamp
               FROM transactions t
               JOIN patients p ON t.patient_uuid = p.uuid
               JOIN pharmacies ph ON t.pharmacy_uuid = ph.uuid"#,
        );
        push_eq_filters(&mut query, filter.eq_filters());
        let rows = query
            .build_query_as::<TransactionRecord>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

/// Fold the supplied `(column, value)` pairs into an AND-conjunction appended
/// to the base SELECT. Column names come from the fixed lists in `models`;
/// only values are bound. Empty strings count as absent, matching the
/// falsy-parameter behavior of the HTTP surface.
fn push_eq_filters<const N: usize>(
    query: &mut QueryBuilder<'_, Sqlite>,
    filters: [(&'static str, Option<String>); N],
) {
    let mut sep = " WHERE ";
    for (column, value) in filters {
        let Some(value) = value else { continue };
        if value.is_empty() {
            continue;
        }
        query.push(sep);
        query.push(column);
        query.push(" = ");
        query.push_bind(value);
        sep = " AND ";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_leaves_base_query_untouched() {
        let mut query = QueryBuilder::new("SELECT uuid FROM patients");
        push_eq_filters(&mut query, PatientFilter::default().eq_filters());
        assert_eq!(query.sql(), "SELECT uuid FROM patients");
    }

    #[test]
    fn supplied_filters_fold_into_conjunction() {
        let filter = PatientFilter {
            first_name: Some("Ana".to_string()),
            last_name: Some("Silva".to_string()),
            ..Default::default()
        };
        let mut query = QueryBuilder::new("SELECT uuid FROM patients");
        push_eq_filters(&mut query, filter.eq_filters());
        assert_eq!(
            query.sql(),
            "SELECT uuid FROM patients WHERE first_name = ? AND last_name = ?"
        );
    }

    #[test]
    fn empty_string_values_are_ignored() {
        let filter = PatientFilter {
            first_name: Some(String::new()),
            ..Default::default()
        };
        let mut query = QueryBuilder::new("SELECT uuid FROM patients");
        push_eq_filters(&mut query, filter.eq_filters());
        assert_eq!(query.sql(), "SELECT uuid FROM patients");
    }
}
