
/// CRUD operations tests for the pizza entity
pub mod crud_tests;
