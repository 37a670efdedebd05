//! # cinelog-core
//!
//! Core types, traits, and validation rules for cinelog, a small backend for
//! tracking watched movies with free-form tags.
//!
//! This crate owns the data model and the rules that decide whether a movie
//! note is accepted. Storage lives in `cinelog-db`, HTTP in `cinelog-api`.

pub mod defaults;
pub mod error;
pub mod models;
pub mod traits;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
pub use validation::{normalize_tag_names, parse_tag_filter, validate_rating};
