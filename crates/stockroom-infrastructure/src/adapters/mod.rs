//! Adapters implementing the domain ports

mod memory_repository;

pub use memory_repository::InMemoryProductRepository;
