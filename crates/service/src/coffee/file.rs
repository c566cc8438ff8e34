use std::sync::Arc;

use async_trait::async_trait;
use models::Coffee;

use crate::coffee::repository::CoffeeRepository;
use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// File-backed repository: a map of `id -> Coffee` persisted as JSON.
/// `list_all` order is unspecified.
pub struct JsonFileCoffeeRepository {
    store: Arc<JsonMapStore<String, Coffee>>,
}

impl JsonFileCoffeeRepository {
    /// Open (or create) the backing file at `path`.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let store = JsonMapStore::<String, Coffee>::new(path).await?;
        Ok(Self { store })
    }
}

#[async_trait]
impl CoffeeRepository for JsonFileCoffeeRepository {
    async fn list_all(&self) -> Result<Vec<Coffee>, ServiceError> {
        Ok(self.store.list().await.into_iter().map(|(_, v)| v).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Coffee>, ServiceError> {
        Ok(self.store.get(&id.to_string()).await)
    }

    async fn save(&self, coffee: Coffee) -> Result<Coffee, ServiceError> {
        self.store.insert(coffee.id.clone(), coffee.clone()).await?;
        Ok(coffee)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.store.contains_key(&id.to_string()).await)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        self.store.remove(&id.to_string()).await
    }
}
