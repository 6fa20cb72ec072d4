//! Service reviews.
//!
//! One review per (customer, service) pair, enforced by a lookup before the
//! insert rather than a database constraint. Ratings are 1-5.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReviewService;
