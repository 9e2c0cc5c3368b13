use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::pizza::{NewPizza, Pizza, PizzaPatch, PizzaRepository};

/// SeaORM-backed repository implementation.
///
/// Works against any SQLite URL: `sqlite::memory:` for a throwaway table,
/// or a file such as `sqlite://Pizzas.db?mode=rwc`. Isolation is SQLite's.
#[derive(Clone)]
pub struct SeaOrmPizzaRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPizzaRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl PizzaRepository for SeaOrmPizzaRepository {
    async fn list(&self, pagination: Option<Pagination>) -> Result<Vec<Pizza>, ServiceError> {
        let (skip, take) = match pagination.map(Pagination::normalize) {
            Some((skip, take)) => (skip, Some(take)),
            None => (0, None),
        };
        Ok(models::pizza::list(&self.db, skip, take).await?)
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: NewPizza) -> Result<Pizza, ServiceError> {
        let p = models::pizza::create(&self.db, &draft.name, draft.description.as_deref()).await?;
        debug!(id = p.id, "pizza row inserted");
        Ok(p)
    }

    async fn get(&self, id: i32) -> Result<Option<Pizza>, ServiceError> {
        Ok(models::pizza::find(&self.db, id).await?)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i32, patch: PizzaPatch) -> Result<Option<Pizza>, ServiceError> {
        Ok(models::pizza::update(&self.db, id, &patch.name, patch.description.as_deref()).await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let existed = models::pizza::delete(&self.db, id).await?;
        debug!(existed, "pizza row delete");
        Ok(existed)
    }
}
