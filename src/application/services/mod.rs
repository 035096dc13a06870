//! Application services.
//!
//! - [`ShortLinkStore`] - Short code generation and the create/read/delete lifecycle

pub mod short_link_store;

pub use short_link_store::{CodePolicy, DEFAULT_MAX_ATTEMPTS, ShortLinkStore};
