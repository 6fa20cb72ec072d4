pub mod provider_handler;

pub use provider_handler::{
    __path_admin_delete_provider, __path_admin_get_provider, __path_admin_list_providers,
    __path_admin_update_provider, __path_browse_providers, __path_create_provider_profile,
    __path_get_public_provider, admin_delete_provider, admin_get_provider, admin_list_providers,
    admin_update_provider, browse_providers, create_provider_profile, get_public_provider,
};
