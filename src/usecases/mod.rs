//! Application use cases. Orchestrate domain logic via ports.

pub mod storefront_service;

pub use storefront_service::StorefrontService;
