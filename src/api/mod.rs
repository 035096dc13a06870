//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into [`crate::application::services::ShortLinkStore`]
//! calls and formats responses according to the wire contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing and HTTP metrics
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
