//! Infrastructure layer - database connection and schema management.

mod db;
pub mod migrations;

pub use db::Database;
pub use migrations::Migrator;
