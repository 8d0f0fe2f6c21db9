//! Core domain types and persistence for the popcorn movie tracker.

pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use error::PopcornError;
