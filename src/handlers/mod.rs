pub mod admin;
pub mod content;
pub mod health_check;
pub mod users;

pub use admin::{
    admin_classify_video_reference, admin_create_event, admin_create_process_step,
    admin_create_service_detail, admin_create_showcase, admin_create_team_member,
    admin_delete_event, admin_delete_process_step, admin_delete_service_detail,
    admin_delete_showcase, admin_delete_team_member, admin_get_event_by_id, admin_get_events,
    admin_get_process_step_by_id, admin_get_process_steps, admin_get_service_detail_by_id,
    admin_get_service_details, admin_get_showcase_by_id, admin_get_showcases,
    admin_get_team_member_by_id, admin_get_team_members, admin_patch_event_active,
    admin_patch_process_step_active, admin_patch_service_detail_active,
    admin_patch_showcase_active, admin_patch_team_member_active, admin_update_event,
    admin_update_process_step, admin_update_service_detail, admin_update_showcase,
    admin_update_team_member, admin_upload_media,
};
pub use content::get_events::get_events;
pub use content::get_process_steps::get_process_steps;
pub use content::get_service_details::get_service_details;
pub use content::get_showcases::get_showcases;
pub use content::get_team_members::get_team_members;
pub use health_check::health_check;
pub use users::get_current_user::get_current_user;
