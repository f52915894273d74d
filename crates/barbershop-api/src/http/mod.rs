//! HTTP/REST API layer for the barbershop service.
//!
//! Axum-based JSON API for the `barber` resource with a JSON error body
//! and CORS support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
