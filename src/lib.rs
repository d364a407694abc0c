use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, patch, post},
};
use sqlx::PgPool;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod media;
pub mod models;
pub mod validation;

use config::Config;
use handlers::*;

const MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

pub fn app(state: AppState) -> Router {
    let allow_origin = match state
        .config
        .cors_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::from(Any),
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let public = Router::new()
        .route("/health", get(health_check))
        .route("/me", get(get_current_user))
        .route("/showcases", get(get_showcases))
        .route("/events", get(get_events))
        .route("/team-members", get(get_team_members))
        .route("/process-steps", get(get_process_steps))
        .route("/service-details", get(get_service_details));

    let admin = Router::new()
        .route(
            "/showcases",
            get(admin_get_showcases).post(admin_create_showcase),
        )
        .route(
            "/showcases/{id}",
            get(admin_get_showcase_by_id)
                .put(admin_update_showcase)
                .delete(admin_delete_showcase),
        )
        .route("/showcases/{id}/active", patch(admin_patch_showcase_active))
        .route("/events", get(admin_get_events).post(admin_create_event))
        .route(
            "/events/{id}",
            get(admin_get_event_by_id)
                .put(admin_update_event)
                .delete(admin_delete_event),
        )
        .route("/events/{id}/active", patch(admin_patch_event_active))
        .route(
            "/team-members",
            get(admin_get_team_members).post(admin_create_team_member),
        )
        .route(
            "/team-members/{id}",
            get(admin_get_team_member_by_id)
                .put(admin_update_team_member)
                .delete(admin_delete_team_member),
        )
        .route(
            "/team-members/{id}/active",
            patch(admin_patch_team_member_active),
        )
        .route(
            "/process-steps",
            get(admin_get_process_steps).post(admin_create_process_step),
        )
        .route(
            "/process-steps/{id}",
            get(admin_get_process_step_by_id)
                .put(admin_update_process_step)
                .delete(admin_delete_process_step),
        )
        .route(
            "/process-steps/{id}/active",
            patch(admin_patch_process_step_active),
        )
        .route(
            "/service-details",
            get(admin_get_service_details).post(admin_create_service_detail),
        )
        .route(
            "/service-details/{id}",
            get(admin_get_service_detail_by_id)
                .put(admin_update_service_detail)
                .delete(admin_delete_service_detail),
        )
        .route(
            "/service-details/{id}/active",
            patch(admin_patch_service_detail_active),
        )
        .route(
            "/media/video-reference",
            post(admin_classify_video_reference),
        )
        .route(
            "/media/upload",
            post(admin_upload_media).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        );

    let uploads = ServeDir::new(&state.config.upload_dir);

    Router::new()
        .nest("/api", public.nest("/admin", admin))
        .nest_service("/uploads", uploads)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
