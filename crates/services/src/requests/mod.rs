//! One request type per use case, grouped by aggregate.

pub mod art;
pub mod audio;
pub mod fact;
pub mod image;
pub mod news;
pub mod source;
pub mod streetcode;
pub mod tag;
pub mod term;
pub mod text;
pub mod timeline;
pub mod toponym;
