pub mod admin_get_process_steps;
pub mod admin_get_process_step_by_id;
pub mod admin_create_process_step;
pub mod admin_update_process_step;
pub mod admin_delete_process_step;
pub mod admin_patch_process_step_active;

pub use admin_get_process_steps::admin_get_process_steps;
pub use admin_get_process_step_by_id::admin_get_process_step_by_id;
pub use admin_create_process_step::admin_create_process_step;
pub use admin_update_process_step::admin_update_process_step;
pub use admin_delete_process_step::admin_delete_process_step;
pub use admin_patch_process_step_active::admin_patch_process_step_active;
