//! # Authentication Module
//!
//! Session-cookie gate for the internal tool: token issuance, fail-closed
//! validation, and the middleware that protects every route except the login
//! flow and static assets.

pub mod jwt;
pub mod middleware;
pub mod models;

/// Name of the session cookie. Fixed; the login handler sets it and the gate
/// middleware reads it.
pub const SESSION_COOKIE: &str = "paismo_auth";
