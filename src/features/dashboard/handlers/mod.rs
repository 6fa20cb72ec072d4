pub mod dashboard_handler;

pub use dashboard_handler::{__path_admin_summary, admin_summary};
