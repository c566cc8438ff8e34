use async_trait::async_trait;
use models::Coffee;

use crate::errors::ServiceError;

/// Persistence seam for coffees, keyed by `Coffee::id`.
/// Implementations can be in-memory, file-backed, or a real database.
#[async_trait]
pub trait CoffeeRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Coffee>, ServiceError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Coffee>, ServiceError>;
    /// Insert, or replace the record with the same id.
    async fn save(&self, coffee: Coffee) -> Result<Coffee, ServiceError>;
    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError>;
    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, ServiceError>;
}
