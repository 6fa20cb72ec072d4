//! Service categories.
//!
//! Admin-managed tags referenced by provider profiles and service listings.
//! Also hosts the shared resolver that turns a client-supplied category
//! reference (id or free-text name) into a concrete record.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
