//! Request-parameter filtering boundary
//!
//! This crate contains:
//! - `ParamFilter`: applies the configured redaction rules to logged
//!   request parameters, one at a time or over a whole map
//! - JSON request-body scrubbing for GraphQL POST bodies

pub mod params;
pub mod request;

pub use params::ParamFilter;
