//! Domain logic for the streetcode content backend.
//!
//! Everything in this crate is pure: enums, field rules, search matching,
//! news navigation and term markup. No database or HTTP dependencies.

pub mod error;
pub mod hashing;
pub mod news;
pub mod paging;
pub mod search;
pub mod streetcode;
pub mod term_markup;
pub mod types;
pub mod validation;
