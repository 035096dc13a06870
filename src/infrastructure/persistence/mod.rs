//! SQLite persistence.
//!
//! - [`SqliteUrlRepository`] - URL record storage and retrieval
//! - [`db`] - Connection pool setup and embedded migrations

pub mod db;
pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
