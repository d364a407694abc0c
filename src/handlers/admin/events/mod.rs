pub mod admin_get_events;
pub mod admin_get_event_by_id;
pub mod admin_create_event;
pub mod admin_update_event;
pub mod admin_delete_event;
pub mod admin_patch_event_active;

pub use admin_get_events::admin_get_events;
pub use admin_get_event_by_id::admin_get_event_by_id;
pub use admin_create_event::admin_create_event;
pub use admin_update_event::admin_update_event;
pub use admin_delete_event::admin_delete_event;
pub use admin_patch_event_active::admin_patch_event_active;
