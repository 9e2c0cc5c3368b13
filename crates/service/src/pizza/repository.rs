use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::pizza::{NewPizza, Pizza, PizzaPatch};

/// Record store for pizzas. The HTTP layer depends on this trait only.
#[async_trait]
pub trait PizzaRepository: Send + Sync {
    /// Every pizza, or one page of them. Order is backend-defined but stable.
    async fn list(&self, pagination: Option<Pagination>) -> Result<Vec<Pizza>, ServiceError>;
    async fn create(&self, draft: NewPizza) -> Result<Pizza, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Pizza>, ServiceError>;
    /// `Ok(None)` when no pizza has this id.
    async fn update(&self, id: i32, patch: PizzaPatch) -> Result<Option<Pizza>, ServiceError>;
    /// Returns whether a pizza was removed; a missing id is not an error.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}
