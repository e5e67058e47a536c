//! Core scrubbing engine for GraphQL request parameters
//!
//! This crate contains:
//! - A single-line printer for parsed GraphQL query documents
//! - The argument policy seam the printer consults for every argument
//! - The `Scrubber`, which substitutes a placeholder for denied argument values

pub mod error;
pub mod printer;
pub mod scrub;

pub use error::{Error, Result};
pub use printer::{ArgumentPolicy, PrintAll, print, print_with_policy};
pub use scrub::{FILTERED_VALUE, Redaction, Scrubber};
