//! Local SQLite persistence.

pub mod error;
pub mod schema;
pub mod storage;

pub use error::DbError;
pub use storage::SqliteStorage;
