//! User account management.
//!
//! Admin-side moderation of accounts (listing, filtered search, updates,
//! block/unblock, deletion with provider cascade) plus self-service profile
//! updates for any authenticated user.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
