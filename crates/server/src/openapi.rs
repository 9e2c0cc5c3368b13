use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::pizzas::{CreatePizzaDto, EditPizzaDto, PizzaDto};

/// Schema for `common::types::Health`, which holds a `&'static str` and stays
/// free of utoipa. Keep the fields in step with it.
#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PizzaStore API",
        description = "Making the pizzas you love!",
        version = "v1"
    ),
    paths(
        crate::routes::health,
        crate::routes::pizzas::get_pizza,
        crate::routes::pizzas::get_all_pizzas,
        crate::routes::pizzas::create_pizza,
        crate::routes::pizzas::edit_pizza,
        crate::routes::pizzas::delete_pizza,
    ),
    components(
        schemas(
            HealthResponse,
            PizzaDto,
            CreatePizzaDto,
            EditPizzaDto,
        )
    ),
    tags(
        (name = "health"),
        (name = "Getters"),
        (name = "Creators"),
        (name = "Editors")
    )
)]
pub struct ApiDoc;
