use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Pizzas")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "Name")]
    pub name: String,
    #[sea_orm(column_name = "Description", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    description: Option<&str>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.map(str::to_string)),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// All rows in ascending `Id` order, optionally windowed by `skip`/`take`.
pub async fn list(
    db: &DatabaseConnection,
    skip: u64,
    take: Option<u64>,
) -> Result<Vec<Model>, errors::ModelError> {
    let mut query = Entity::find().order_by_asc(Column::Id);
    if skip > 0 {
        query = query.offset(skip);
    }
    if let Some(take) = take {
        query = query.limit(take);
    }
    Ok(query.all(db).await?)
}

/// Overwrite `name`, and `description` when one is given. `None` if the row is absent.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    description: Option<&str>,
) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.name = Set(name.to_string());
    if let Some(d) = description {
        am.description = Set(Some(d.to_string()));
    }
    Ok(Some(am.update(db).await?))
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
