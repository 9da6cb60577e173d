//! Validators registered with the [`crate::dispatch::Dispatcher`].

pub mod news;
pub mod streetcode;
