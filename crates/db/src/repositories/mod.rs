//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&mut DbSession` as the first argument.

pub mod log_repo;

pub use log_repo::LogEntryRepo;
