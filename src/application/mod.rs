//! Application layer orchestrating domain operations.
//!
//! Services depend on repository and metrics traits from [`crate::domain`],
//! never on concrete infrastructure.

pub mod services;
