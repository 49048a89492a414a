//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate contains the file-backed record store and its in-memory twin.

pub mod store;

pub use store::{InMemoryEntryRepository, JsonFileEntryRepository};
