//! Application state wiring the service to its store.
//!
//! `BarberService` is generic over the repository trait; AppState pins it to
//! the SQLite implementation.

use std::sync::Arc;

use barbershop_core::service::barber::BarberService;
use barbershop_infra::sqlite::barber::SqliteBarberRepository;
use barbershop_infra::sqlite::pool::{DatabasePool, database_url};

/// Concrete type alias for the service generic pinned to the infra implementation.
pub type ConcreteBarberService = BarberService<SqliteBarberRepository>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub barber_service: Arc<ConcreteBarberService>,
}

impl AppState {
    /// Open the database at `database_path` (creating the table if needed)
    /// and wire the service.
    pub async fn init(database_path: &str) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(&database_url(database_path)).await?;
        Ok(Self::from_pool(db_pool))
    }

    pub fn from_pool(db_pool: DatabasePool) -> Self {
        let repo = SqliteBarberRepository::new(db_pool);
        Self {
            barber_service: Arc::new(BarberService::new(repo)),
        }
    }
}
