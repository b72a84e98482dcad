//! Service layer providing the record-directory operations on top of models.
//! - Separates business logic from data access through [`directory::repository::UserRepository`].
//! - Ships a SeaORM adapter for production and an in-memory adapter for tests.

pub mod errors;
pub mod directory;
#[cfg(test)]
pub mod test_support;
