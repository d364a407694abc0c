pub mod admin_get_service_details;
pub mod admin_get_service_detail_by_id;
pub mod admin_create_service_detail;
pub mod admin_update_service_detail;
pub mod admin_delete_service_detail;
pub mod admin_patch_service_detail_active;

pub use admin_get_service_details::admin_get_service_details;
pub use admin_get_service_detail_by_id::admin_get_service_detail_by_id;
pub use admin_create_service_detail::admin_create_service_detail;
pub use admin_update_service_detail::admin_update_service_detail;
pub use admin_delete_service_detail::admin_delete_service_detail;
pub use admin_patch_service_detail_active::admin_patch_service_detail_active;
