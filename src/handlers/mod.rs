pub mod patients;
pub mod pharmacies;
pub mod transactions;
