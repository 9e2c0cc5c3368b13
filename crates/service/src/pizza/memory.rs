use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::pizza::{NewPizza, Pizza, PizzaPatch, PizzaRepository};

/// In-process pizza list kept in insertion order.
///
/// Every mutation, id assignment included, runs under the write lock, so
/// concurrent requests never reuse an id or lose an update.
#[derive(Clone, Default)]
pub struct InMemoryPizzaRepository {
    inner: Arc<RwLock<Vec<Pizza>>>,
}

impl InMemoryPizzaRepository {
    pub fn new() -> Self { Self::default() }

    /// Start from existing records, keeping their ids and order.
    pub fn with_records(records: Vec<Pizza>) -> Self {
        Self { inner: Arc::new(RwLock::new(records)) }
    }
}

#[async_trait]
impl PizzaRepository for InMemoryPizzaRepository {
    async fn list(&self, pagination: Option<Pagination>) -> Result<Vec<Pizza>, ServiceError> {
        let list = self.inner.read().await;
        let out = match pagination.map(Pagination::normalize) {
            Some((skip, take)) => list
                .iter()
                .skip(usize::try_from(skip).unwrap_or(usize::MAX))
                .take(usize::try_from(take).unwrap_or(usize::MAX))
                .cloned()
                .collect(),
            None => list.clone(),
        };
        Ok(out)
    }

    async fn create(&self, draft: NewPizza) -> Result<Pizza, ServiceError> {
        let mut list = self.inner.write().await;
        let id = match list.iter().map(|p| p.id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| ServiceError::Db("pizza id space exhausted".into()))?,
            None => 1,
        };
        let pizza = Pizza { id, name: draft.name, description: draft.description };
        list.push(pizza.clone());
        debug!(id, "pizza appended to list");
        Ok(pizza)
    }

    async fn get(&self, id: i32) -> Result<Option<Pizza>, ServiceError> {
        let list = self.inner.read().await;
        Ok(list.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, id: i32, patch: PizzaPatch) -> Result<Option<Pizza>, ServiceError> {
        let mut list = self.inner.write().await;
        let Some(pizza) = list.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        pizza.name = patch.name;
        if let Some(d) = patch.description {
            pizza.description = Some(d);
        }
        Ok(Some(pizza.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut list = self.inner.write().await;
        let before = list.len();
        list.retain(|p| p.id != id);
        Ok(list.len() != before)
    }
}
