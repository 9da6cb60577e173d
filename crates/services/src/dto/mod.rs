//! Wire types returned by and accepted from request handlers.
//!
//! All DTOs serialize with `camelCase` field names. Row-to-DTO mapping is
//! done with `From` impls next to each type.

pub mod content;
pub mod media;
pub mod news;
pub mod source;
pub mod streetcode;
pub mod tag;
pub mod term;
pub mod toponym;
