use axum::{Json, extract::State};

use crate::{AppState, auth::AdminUser, error::AppError, models::*, validation};

pub async fn admin_create_event(
    _auth: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<AdminCreateEventRequest>,
) -> Result<Json<AdminItemResponse<AdminEventResponse>>, AppError> {
    let title = validation::required_text("título", &req.title)?;
    let image = validation::optional_image_reference(req.image)?;
    let (video_href, video_type) = match validation::optional_video_reference(req.video_href)? {
        Some(reference) => {
            let (href, kind) = reference.into_parts();
            (Some(href), Some(kind.as_str()))
        }
        None => (None, None),
    };
    let description = validation::optional_text(req.description);
    let location = validation::optional_text(req.location);
    let active = req.active.unwrap_or(true);

    // Concurrent creates may share a display_order; lists break ties by id
    let event: Event = sqlx::query_as(
        r#"
        INSERT INTO events (title, description, location, event_date, image, video_href, video_type, active, display_order, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, (SELECT COALESCE(MAX(display_order), 0) + 1 FROM events)), NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&title)
    .bind(&description)
    .bind(&location)
    .bind(req.event_date)
    .bind(&image)
    .bind(&video_href)
    .bind(video_type)
    .bind(active)
    .bind(req.display_order)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(AdminItemResponse { item: event.into() }))
}
