//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored short code mapping
//! - [`NewUrlRecord`] - Insert input, before storage assigns an id

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
