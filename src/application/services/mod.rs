//! Business logic services for the application layer.

pub mod directory_service;
pub mod resolver_service;

pub use directory_service::DirectoryService;
pub use resolver_service::ResolverService;
