use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use service::{
    errors::ServiceError,
    pagination::Pagination,
    pizza::{NewPizza, Pizza, PizzaPatch},
};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::{errors::JsonApiError, state::ServerState};

/// Pizza as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PizzaDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<Pizza> for PizzaDto {
    fn from(p: Pizza) -> Self {
        Self { id: p.id, name: p.name, description: p.description }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePizzaDto {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct EditPizzaDto {
    pub name: String,
    /// Left unchanged when omitted.
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number
    pub page: Option<u32>,
    /// Items per page; paging applies only when this is given
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
}

#[utoipa::path(
    get, path = "/pizzas/{id}", tag = "Getters", operation_id = "GetPizza",
    params(("id" = i32, Path, description = "Pizza id")),
    responses(
        (status = 200, description = "Found", body = PizzaDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_pizza(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<PizzaDto>, JsonApiError> {
    match state.pizzas.get(id).await? {
        Some(p) => Ok(Json(p.into())),
        None => Err(ServiceError::not_found("pizza").into()),
    }
}

#[utoipa::path(
    get, path = "/pizzas", tag = "Getters", operation_id = "GetAllPizzas",
    params(ListQuery),
    responses((status = 200, description = "List OK", body = [PizzaDto]))
)]
pub async fn get_all_pizzas(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<PizzaDto>>, JsonApiError> {
    let pagination = Pagination::from_query(q.page, q.page_size);
    let list = state.pizzas.list(pagination).await?;
    info!(count = list.len(), ?pagination, "list pizzas");
    Ok(Json(list.into_iter().map(PizzaDto::from).collect()))
}

#[utoipa::path(
    post, path = "/pizza", tag = "Creators", operation_id = "CreatePizza",
    request_body = CreatePizzaDto,
    responses(
        (status = 201, description = "Created", body = PizzaDto,
            headers(("Location" = String, description = "Path of the new pizza")))
    )
)]
pub async fn create_pizza(
    State(state): State<ServerState>,
    Json(input): Json<CreatePizzaDto>,
) -> Result<impl IntoResponse, JsonApiError> {
    let p = state.pizzas.create(NewPizza::named(input.name)).await?;
    info!(id = p.id, name = %p.name, "created pizza");
    let location = format!("/pizzas/{}", p.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(PizzaDto::from(p))))
}

#[utoipa::path(
    put, path = "/pizzas/{id}", tag = "Editors", operation_id = "EditPizza",
    params(("id" = i32, Path, description = "Pizza id")),
    request_body = EditPizzaDto,
    responses(
        (status = 200, description = "Updated", body = PizzaDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn edit_pizza(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<EditPizzaDto>,
) -> Result<Json<PizzaDto>, JsonApiError> {
    let patch = PizzaPatch { name: input.name, description: input.description };
    match state.pizzas.update(id, patch).await? {
        Some(p) => {
            info!(id = p.id, "updated pizza");
            Ok(Json(p.into()))
        }
        None => Err(ServiceError::not_found("pizza").into()),
    }
}

#[utoipa::path(
    delete, path = "/pizzas/{id}", operation_id = "DeletePizza",
    params(("id" = i32, Path, description = "Pizza id")),
    responses((status = 204, description = "Deleted, or never existed"))
)]
pub async fn delete_pizza(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    let existed = state.pizzas.delete(id).await?;
    info!(id, existed, "deleted pizza");
    Ok(StatusCode::NO_CONTENT)
}
