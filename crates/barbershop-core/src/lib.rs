//! Business logic and repository trait definitions for the barbershop service.
//!
//! This crate defines the "port" (repository trait) that the infrastructure
//! layer implements. It depends only on `barbershop-types` -- never on
//! `barbershop-infra` or any database/IO crate.

pub mod repository;
pub mod service;
