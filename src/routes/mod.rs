// # Routes Module
//
// - This module contains all HTTP route handlers for the Paismo web tool.
// - Routes are organized by functionality into separate submodules.
//
// ## Route Organization
// - Group related endpoints in the same module
// - Register new routers in `server.rs`

/// Health check and monitoring endpoints
pub mod health;

/// Login/logout endpoints for the shared account
pub mod auth;

/// Gate-protected proxy endpoints to the research backend
pub mod research;

/// Static pages (presentation only)
pub mod pages;
