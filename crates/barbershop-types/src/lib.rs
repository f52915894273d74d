//! Shared domain types for the barbershop service.
//!
//! This crate contains the `Barber` record, its request payload, the error
//! enums shared across layers, and the server configuration type.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod barber;
pub mod config;
pub mod error;
