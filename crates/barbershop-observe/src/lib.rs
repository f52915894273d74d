//! Logging setup for the barbershop service.

pub mod tracing_setup;
