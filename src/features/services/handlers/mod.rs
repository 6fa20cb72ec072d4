pub mod service_handler;

pub use service_handler::{
    __path_admin_delete_service, __path_admin_list_services, __path_admin_list_unapproved,
    __path_admin_update_service, __path_create_service, __path_delete_service,
    __path_list_provider_services, __path_list_public_services, __path_list_services_by_provider,
    __path_search_services, __path_toggle_service_activation, __path_toggle_service_approval,
    __path_update_service, admin_delete_service, admin_list_services, admin_list_unapproved,
    admin_update_service, create_service, delete_service, list_provider_services,
    list_public_services, list_services_by_provider, search_services, toggle_service_activation,
    toggle_service_approval, update_service,
};
