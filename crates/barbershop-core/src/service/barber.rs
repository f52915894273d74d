//! Barber management service.
//!
//! Thin use-case layer over a [`BarberRepository`]: lookups that find nothing
//! become [`BarberError::NotFound`], and storage failures become
//! [`BarberError::StorageError`]. Update and delete of an absent id are
//! no-ops, never errors.

use barbershop_types::barber::{Barber, BarberId, BarberRequest};
use barbershop_types::error::BarberError;

use crate::repository::barber::BarberRepository;

/// Service exposing the five barber operations.
///
/// Generic over the repository trait so barbershop-core never depends on
/// barbershop-infra.
pub struct BarberService<R: BarberRepository> {
    repo: R,
}

impl<R: BarberRepository> BarberService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All barbers in store order (insertion order for the SQLite store).
    pub async fn list_barbers(&self) -> Result<Vec<Barber>, BarberError> {
        self.repo
            .list()
            .await
            .map_err(|e| BarberError::StorageError(e.to_string()))
    }

    pub async fn get_barber(&self, id: BarberId) -> Result<Barber, BarberError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| BarberError::StorageError(e.to_string()))?
            .ok_or(BarberError::NotFound)
    }

    /// Insert a new barber and return it with its store-assigned id.
    pub async fn create_barber(&self, request: BarberRequest) -> Result<Barber, BarberError> {
        let barber = self
            .repo
            .create(&request)
            .await
            .map_err(|e| BarberError::StorageError(e.to_string()))?;

        tracing::info!(id = %barber.id, "created barber");
        Ok(barber)
    }

    /// Replace name, address and phone of barber `id`.
    ///
    /// Returns the record as written. When no row matches, nothing is created
    /// and the same record is still returned.
    pub async fn update_barber(
        &self,
        id: BarberId,
        request: BarberRequest,
    ) -> Result<Barber, BarberError> {
        let barber = request.into_barber(id);
        let affected = self
            .repo
            .update(&barber)
            .await
            .map_err(|e| BarberError::StorageError(e.to_string()))?;

        if affected == 0 {
            tracing::debug!(%id, "update matched no barber");
        }
        Ok(barber)
    }

    pub async fn delete_barber(&self, id: BarberId) -> Result<(), BarberError> {
        let affected = self
            .repo
            .delete(id)
            .await
            .map_err(|e| BarberError::StorageError(e.to_string()))?;

        if affected == 0 {
            tracing::debug!(%id, "delete matched no barber");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barbershop_types::error::RepositoryError;
    use std::sync::Mutex;

    // --- In-memory repository for testing ---

    #[derive(Default)]
    struct MockRepository {
        rows: Mutex<Vec<Barber>>,
        next_id: Mutex<i64>,
        fail: bool,
    }

    impl MockRepository {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn check(&self) -> Result<(), RepositoryError> {
            if self.fail {
                Err(RepositoryError::Query("disk I/O error".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl BarberRepository for MockRepository {
        async fn list(&self) -> Result<Vec<Barber>, RepositoryError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: BarberId) -> Result<Option<Barber>, RepositoryError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().iter().find(|b| b.id == id).cloned())
        }

        async fn create(&self, request: &BarberRequest) -> Result<Barber, RepositoryError> {
            self.check()?;
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let barber = request.clone().into_barber(BarberId(*next_id));
            self.rows.lock().unwrap().push(barber.clone());
            Ok(barber)
        }

        async fn update(&self, barber: &Barber) -> Result<u64, RepositoryError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|b| b.id == barber.id) {
                Some(row) => {
                    *row = barber.clone();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: BarberId) -> Result<u64, RepositoryError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|b| b.id != id);
            Ok((before - rows.len()) as u64)
        }
    }

    fn request(name: &str) -> BarberRequest {
        BarberRequest {
            name: name.to_string(),
            address: format!("{name} Street"),
            phone: "555-0000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = BarberService::new(MockRepository::default());

        let created = service.create_barber(request("Joe")).await.unwrap();
        assert_eq!(created.id, BarberId(1));

        let found = service.get_barber(created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = BarberService::new(MockRepository::default());
        let err = service.get_barber(BarberId(5)).await.unwrap_err();
        assert!(matches!(err, BarberError::NotFound));
    }

    #[tokio::test]
    async fn test_update_missing_creates_nothing() {
        let service = BarberService::new(MockRepository::default());

        let echoed = service
            .update_barber(BarberId(3), request("Ghost"))
            .await
            .unwrap();
        assert_eq!(echoed.id, BarberId(3));
        assert!(service.list_barbers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let service = BarberService::new(MockRepository::default());
        service.create_barber(request("Keep")).await.unwrap();

        service.delete_barber(BarberId(42)).await.unwrap();
        assert_eq!(service.list_barbers().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_storage_failure_maps_to_storage_error() {
        let service = BarberService::new(MockRepository::failing());

        let err = service.list_barbers().await.unwrap_err();
        assert!(matches!(err, BarberError::StorageError(ref m) if m.contains("disk I/O error")));

        let err = service.get_barber(BarberId(1)).await.unwrap_err();
        assert!(matches!(err, BarberError::StorageError(_)));
    }
}
