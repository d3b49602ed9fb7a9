//! Core domain layer. No external I/O dependencies.
//!
//! Entities and curation rules live here. Dependencies flow inward.

pub mod curation;
pub mod entities;
pub mod errors;

pub use curation::{select_new_arrivals, select_todays_offers};
pub use entities::{
    ApiResponse, Category, CategoryNode, Product, ProductCatalog, ProductId, Section, SectionKind,
};
pub use errors::DomainError;
