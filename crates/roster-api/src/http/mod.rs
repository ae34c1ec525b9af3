//! HTTP interface module.
//!
//! Provides REST API endpoints for:
//! - Students, companies and agents listings
//! - Agent create, update, replace and delete
//! - The keyword proxy
//! - API documentation

pub mod agents;
pub mod docs;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod say;
