//! Business logic services (use cases).
//!
//! Services orchestrate repository calls and map storage outcomes to domain
//! errors. They depend on traits (ports) -- never on concrete infrastructure
//! implementations.

pub mod barber;
