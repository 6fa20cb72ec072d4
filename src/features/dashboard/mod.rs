//! Admin dashboard.
//!
//! Read-only aggregation over the same records the other features write.
//! No invariants of its own.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::DashboardService;
