pub mod review_handler;

pub use review_handler::{
    __path_add_review, __path_admin_delete_review, __path_admin_list_reviews,
    __path_delete_own_review, __path_list_service_reviews, add_review, admin_delete_review,
    admin_list_reviews, delete_own_review, list_service_reviews,
};
