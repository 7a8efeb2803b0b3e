//! Repository ports implemented by the infrastructure layer

mod product_repository;

pub use product_repository::ProductRepository;
