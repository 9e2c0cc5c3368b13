pub mod errors;
pub mod db;
pub mod pizza;

#[cfg(test)]
mod tests;
