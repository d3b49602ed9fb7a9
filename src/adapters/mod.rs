//! Infrastructure adapters. Implement outbound ports.
//!
//! HTTP category API, product catalog files, terminal UI. Map errors to DomainError.

pub mod http;
pub mod persistence;
pub mod ui;
