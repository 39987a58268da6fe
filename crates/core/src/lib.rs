//! Domain types for the request-log handler.
//!
//! This crate has no database dependency: it owns the invocation event
//! (decoded once at the boundary into a tagged variant) and the outward
//! response contract shared by both dispatch modes.

pub mod event;
pub mod response;
