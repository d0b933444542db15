pub mod auth;

pub use auth::RequireCredentials;
