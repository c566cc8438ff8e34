#![cfg(test)]
use async_trait::async_trait;
use models::Coffee;

use crate::coffee::repository::CoffeeRepository;
use crate::errors::ServiceError;

/// Repository whose every call fails, for exercising error propagation.
pub struct FailingCoffeeRepository;

fn down<T>() -> Result<T, ServiceError> {
    Err(ServiceError::StoreUnavailable("backend offline".into()))
}

#[async_trait]
impl CoffeeRepository for FailingCoffeeRepository {
    async fn list_all(&self) -> Result<Vec<Coffee>, ServiceError> { down() }
    async fn get_by_id(&self, _id: &str) -> Result<Option<Coffee>, ServiceError> { down() }
    async fn save(&self, _coffee: Coffee) -> Result<Coffee, ServiceError> { down() }
    async fn exists_by_id(&self, _id: &str) -> Result<bool, ServiceError> { down() }
    async fn delete_by_id(&self, _id: &str) -> Result<bool, ServiceError> { down() }
}
