use std::sync::Arc;

use models::{coffee::generate_id, Coffee};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::coffee::repository::CoffeeRepository;
use crate::errors::ServiceError;

/// Application service for the coffee resource.
///
/// Reads go straight to the repository. Mutations are serialized through
/// `write_lock`, so each create/upsert/delete is atomic with respect to the
/// others even when the repository itself offers no such guarantee.
pub struct CoffeeService<R: CoffeeRepository + ?Sized> {
    repo: Arc<R>,
    write_lock: Mutex<()>,
}

impl<R: CoffeeRepository + ?Sized> CoffeeService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo, write_lock: Mutex::new(()) }
    }

    pub async fn list_all(&self) -> Result<Vec<Coffee>, ServiceError> {
        let all = self.repo.list_all().await?;
        debug!(count = all.len(), "listed coffees");
        Ok(all)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Coffee>, ServiceError> {
        self.repo.get_by_id(id).await
    }

    /// Store `coffee`, generating an id when the caller left it empty.
    /// A caller-supplied id that already exists replaces that record.
    #[instrument(skip(self, coffee), fields(name = %coffee.name))]
    pub async fn create(&self, mut coffee: Coffee) -> Result<Coffee, ServiceError> {
        if !coffee.has_id() {
            coffee.id = generate_id();
        }
        let _guard = self.write_lock.lock().await;
        let saved = self.repo.save(coffee).await?;
        info!(id = %saved.id, "created coffee");
        Ok(saved)
    }

    /// Replace the name of the coffee stored under `id`, or create it.
    /// The record is always keyed by `id`; `coffee.id` is not consulted.
    /// Returns the stored record and whether it was newly created.
    #[instrument(skip(self, coffee))]
    pub async fn upsert(&self, id: &str, coffee: Coffee) -> Result<(Coffee, bool), ServiceError> {
        let _guard = self.write_lock.lock().await;
        let existed = self.repo.exists_by_id(id).await?;
        let saved = self.repo.save(Coffee::with_id(id, coffee.name)).await?;
        if existed {
            info!("updated coffee");
        } else {
            info!("created coffee via upsert");
        }
        Ok((saved, !existed))
    }

    /// Remove the coffee if present. Deleting an unknown id is not an error.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;
        let removed = self.repo.delete_by_id(id).await?;
        info!(removed, "deleted coffee");
        Ok(())
    }
}
