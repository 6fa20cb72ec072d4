pub mod booking_handler;

pub use booking_handler::{
    __path_accept_booking, __path_admin_delete_booking, __path_admin_get_booking,
    __path_admin_list_bookings, __path_admin_update_booking_status, __path_booking_stats,
    __path_cancel_booking, __path_create_booking, __path_list_customer_bookings,
    __path_list_provider_bookings, __path_reject_booking, accept_booking, admin_delete_booking,
    admin_get_booking, admin_list_bookings, admin_update_booking_status, booking_stats,
    cancel_booking, create_booking, list_customer_bookings, list_provider_bookings,
    reject_booking,
};
