pub mod user_handler;

pub use user_handler::{
    __path_delete_customer, __path_delete_user, __path_get_customer, __path_get_user,
    __path_list_customers, __path_list_users, __path_search_users, __path_toggle_user_status,
    __path_update_customer, __path_update_own_profile, __path_update_user, delete_customer,
    delete_user, get_customer, get_user, list_customers, list_users, search_users,
    toggle_user_status, update_customer, update_own_profile, update_user,
};
