//! # shortlink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL record entity, repository and metrics traits
//! - **Application Layer** ([`application`]) - [`ShortLinkStore`](application::services::ShortLinkStore):
//!   code generation, collision retry, create/read/delete
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repository, metrics recorder
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db?mode=rwc"
//! cargo run
//!
//! curl -X POST localhost:8080/urls -H 'content-type: application/json' \
//!      -d '{"original": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{CodePolicy, ShortLinkStore};
    pub use crate::domain::LinkMetrics;
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::domain::repositories::{InsertOutcome, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
