//! Pizza catalog store: one trait, interchangeable backends.

pub mod memory;
pub mod repository;
pub mod seaorm;

pub use memory::InMemoryPizzaRepository;
pub use repository::PizzaRepository;
pub use seaorm::SeaOrmPizzaRepository;

/// The stored record; shared by every backend.
pub type Pizza = models::pizza::Model;

/// Fields supplied when creating a pizza. The id is always store-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPizza {
    pub name: String,
    pub description: Option<String>,
}

impl NewPizza {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None }
    }
}

/// Mutable fields of an existing pizza. A `None` description leaves the stored one alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PizzaPatch {
    pub name: String,
    pub description: Option<String>,
}
