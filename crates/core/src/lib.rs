#![forbid(unsafe_code)]

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod model;

pub use catalog::{CatalogError, ContentCatalog};
pub use error::Error;
pub use evaluator::{correct_option_ids, is_correct, option_mark};
