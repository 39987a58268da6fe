//! Domain model structs and DTOs.

pub mod log_entry;
