//! # Research Module
//!
//! Typed access to the external research/email-generation backend: the wire
//! models and the error-normalizing HTTP client.

pub mod client;
pub mod models;

pub use client::{ApiError, ResearchClient};
