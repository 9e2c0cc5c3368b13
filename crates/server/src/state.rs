use std::sync::Arc;

use service::pizza::PizzaRepository;

/// Shared handler state. Handlers only ever see the store trait object.
#[derive(Clone)]
pub struct ServerState {
    pub pizzas: Arc<dyn PizzaRepository>,
}

impl ServerState {
    pub fn new(pizzas: Arc<dyn PizzaRepository>) -> Self { Self { pizzas } }
}
