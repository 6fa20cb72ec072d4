//! Booking engine.
//!
//! Holds the real invariants of the platform: a slot
//! (provider, service, date, time) can be claimed once, bookings only move
//! pending -> confirmed | rejected | cancelled, and only the right party may
//! drive each transition. Slot uniqueness is enforced twice: a friendly
//! pre-check for the error message, and a unique index behind an atomic
//! insert so two racing requests cannot both claim the slot.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::BookingService;
