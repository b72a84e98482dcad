//! Persistence layer: SeaORM entities, connection helpers and storage errors.

pub mod errors;
pub mod db;
pub mod user;

#[cfg(test)]
mod tests;
