//! Field validation primitives and the pure rule sets for streetcodes, tags
//! and news.
//!
//! Everything here works on borrowed views of the incoming data; checks that
//! need a repository (index uniqueness, image existence) live in the service
//! layer and append to the same [`Violations`] list.

pub mod news;
pub mod rules;
pub mod streetcode;
pub mod tag;

pub use rules::{FieldViolation, Violations};
