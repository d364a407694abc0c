pub mod admin_get_showcases;
pub mod admin_get_showcase_by_id;
pub mod admin_create_showcase;
pub mod admin_update_showcase;
pub mod admin_delete_showcase;
pub mod admin_patch_showcase_active;

pub use admin_get_showcases::admin_get_showcases;
pub use admin_get_showcase_by_id::admin_get_showcase_by_id;
pub use admin_create_showcase::admin_create_showcase;
pub use admin_update_showcase::admin_update_showcase;
pub use admin_delete_showcase::admin_delete_showcase;
pub use admin_patch_showcase_active::admin_patch_showcase_active;
