//! Directory module: three-layer architecture (domain, repository, service).
//!
//! Holds every record-level business rule for user records; the HTTP layer
//! only translates requests and outcomes.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{UpdateOutcome, User};
pub use repository::UserRepository;
pub use service::DirectoryService;
