pub mod get_showcases;
pub mod get_events;
pub mod get_team_members;
pub mod get_process_steps;
pub mod get_service_details;
