//! Command/query layer for the streetcode backend.
//!
//! Every use case is a [`dispatch::Request`] type whose `handle` reads
//! through the repositories in [`context::AppContext`], maps rows to DTOs
//! and returns a [`error::ServiceResult`]. The [`dispatch::Dispatcher`] runs
//! the validators registered for a request before its handler.

pub mod blob;
pub mod context;
pub mod dispatch;
pub mod dto;
pub mod error;
pub mod requests;
pub mod text_service;
pub mod validators;

#[cfg(test)]
pub(crate) mod test_support;
