//! HTTP host for the request-log handler.
//!
//! The host maps each incoming event onto one invocation: decode the
//! payload, run the handler, translate the response contract back onto HTTP.

pub mod config;
pub mod handler;
pub mod routes;
pub mod state;
