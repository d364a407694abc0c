#[path = "events/mod.rs"]
pub mod events;
#[path = "media/mod.rs"]
pub mod media;
#[path = "process_steps/mod.rs"]
pub mod process_steps;
#[path = "service_details/mod.rs"]
pub mod service_details;
#[path = "showcases/mod.rs"]
pub mod showcases;
#[path = "team_members/mod.rs"]
pub mod team_members;

pub use events::{
    admin_create_event, admin_delete_event, admin_get_event_by_id, admin_get_events,
    admin_patch_event_active, admin_update_event,
};
pub use media::{admin_classify_video_reference, admin_upload_media};
pub use process_steps::{
    admin_create_process_step, admin_delete_process_step, admin_get_process_step_by_id,
    admin_get_process_steps, admin_patch_process_step_active, admin_update_process_step,
};
pub use service_details::{
    admin_create_service_detail, admin_delete_service_detail, admin_get_service_detail_by_id,
    admin_get_service_details, admin_patch_service_detail_active, admin_update_service_detail,
};
pub use showcases::{
    admin_create_showcase, admin_delete_showcase, admin_get_showcase_by_id, admin_get_showcases,
    admin_patch_showcase_active, admin_update_showcase,
};
pub use team_members::{
    admin_create_team_member, admin_delete_team_member, admin_get_team_member_by_id,
    admin_get_team_members, admin_patch_team_member_active, admin_update_team_member,
};
