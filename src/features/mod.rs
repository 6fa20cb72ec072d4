pub mod auth;
pub mod bookings;
pub mod categories;
pub mod dashboard;
pub mod providers;
pub mod reviews;
pub mod services;
pub mod users;
