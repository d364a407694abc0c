pub mod admin_get_team_members;
pub mod admin_get_team_member_by_id;
pub mod admin_create_team_member;
pub mod admin_update_team_member;
pub mod admin_delete_team_member;
pub mod admin_patch_team_member_active;

pub use admin_get_team_members::admin_get_team_members;
pub use admin_get_team_member_by_id::admin_get_team_member_by_id;
pub use admin_create_team_member::admin_create_team_member;
pub use admin_update_team_member::admin_update_team_member;
pub use admin_delete_team_member::admin_delete_team_member;
pub use admin_patch_team_member_active::admin_patch_team_member_active;
