//! # Lobby REST
//!
//! REST API layer using Axum for the Lobby users service.
//! Provides the `/api/users` endpoints, content negotiation between JSON and
//! XML, pagination headers and health checks.

pub mod controllers;
pub mod extractors;
pub mod links;
pub mod middleware;
pub mod openapi;
pub mod pagination;
pub mod responses;
pub mod router;
pub mod state;

pub use links::*;
pub use router::*;
pub use state::*;
