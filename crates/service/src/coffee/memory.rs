use async_trait::async_trait;
use models::Coffee;
use tokio::sync::RwLock;

use crate::coffee::repository::CoffeeRepository;
use crate::errors::ServiceError;

/// In-process repository keeping coffees in insertion order.
/// Lookups are linear scans; the collection is a demo menu, not a dataset.
#[derive(Default)]
pub struct InMemoryCoffeeRepository {
    coffees: RwLock<Vec<Coffee>>,
}

impl InMemoryCoffeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CoffeeRepository for InMemoryCoffeeRepository {
    async fn list_all(&self) -> Result<Vec<Coffee>, ServiceError> {
        Ok(self.coffees.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Coffee>, ServiceError> {
        let coffees = self.coffees.read().await;
        Ok(coffees.iter().find(|c| c.id == id).cloned())
    }

    async fn save(&self, coffee: Coffee) -> Result<Coffee, ServiceError> {
        let mut coffees = self.coffees.write().await;
        match coffees.iter_mut().find(|c| c.id == coffee.id) {
            Some(existing) => *existing = coffee.clone(),
            None => coffees.push(coffee.clone()),
        }
        Ok(coffee)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.coffees.read().await.iter().any(|c| c.id == id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        let mut coffees = self.coffees.write().await;
        let before = coffees.len();
        coffees.retain(|c| c.id != id);
        Ok(coffees.len() != before)
    }
}
