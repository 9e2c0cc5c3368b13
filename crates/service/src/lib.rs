//! Service layer providing the pizza catalog store on top of models.
//! - `pizza::PizzaRepository` is the only surface the HTTP layer sees.
//! - Two backends: a lock-guarded in-process list and a sea-orm table.

pub mod errors;
pub mod pagination;
pub mod pizza;
#[cfg(test)]
pub mod test_support;
