//! Infrastructure layer for the barbershop service.
//!
//! Contains the SQLite implementation of the repository trait defined in
//! `barbershop-core` and the TOML config loader.

pub mod config;
pub mod sqlite;
