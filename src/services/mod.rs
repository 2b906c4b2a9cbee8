// Service exports
pub mod repository;

pub use repository::{InMemoryRepository, Record, Repository, RepositoryError, SeedData};
