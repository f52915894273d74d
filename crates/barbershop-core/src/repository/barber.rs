//! Barber repository trait definition.

use barbershop_types::barber::{Barber, BarberId, BarberRequest};
use barbershop_types::error::RepositoryError;

/// Repository trait for barber persistence.
///
/// Implementations live in barbershop-infra (e.g., SqliteBarberRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait BarberRepository: Send + Sync {
    /// List every barber in store order.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Barber>, RepositoryError>> + Send;

    /// Get a barber by id.
    fn get_by_id(
        &self,
        id: BarberId,
    ) -> impl std::future::Future<Output = Result<Option<Barber>, RepositoryError>> + Send;

    /// Insert a new barber. The store assigns the id.
    fn create(
        &self,
        request: &BarberRequest,
    ) -> impl std::future::Future<Output = Result<Barber, RepositoryError>> + Send;

    /// Overwrite name, address and phone of the row matching `barber.id`.
    ///
    /// Returns the number of rows affected; zero is not an error.
    fn update(
        &self,
        barber: &Barber,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Delete the row matching `id`.
    ///
    /// Returns the number of rows affected; zero is not an error.
    fn delete(
        &self,
        id: BarberId,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
