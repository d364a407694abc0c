use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    media::VideoReference,
    models::*,
    validation::{self, Clearable},
};

/// Validated edits to an event. Absent fields keep the stored value; a blank
/// optional field clears it.
struct EventChanges {
    title: Option<String>,
    description: Clearable<String>,
    location: Clearable<String>,
    event_date: Clearable<time::OffsetDateTime>,
    image: Clearable<String>,
    video: Clearable<VideoReference>,
    active: Option<bool>,
    display_order: Option<i32>,
}

impl EventChanges {
    fn validate(req: AdminUpdateEventRequest) -> Result<Self, AppError> {
        Ok(Self {
            title: validation::optional_required_text("título", req.title)?,
            description: validation::clearable_text(req.description),
            location: validation::clearable_text(req.location),
            event_date: req.event_date,
            image: validation::clearable_image_reference(req.image)?,
            video: validation::clearable_video_reference(req.video_href)?,
            active: req.active,
            display_order: req.display_order,
        })
    }

    fn apply(self, existing: Event) -> Event {
        let (video_href, video_type) = match self.video {
            Some(Some(reference)) => {
                let (href, kind) = reference.into_parts();
                (Some(href), Some(kind.as_str().to_string()))
            }
            Some(None) => (None, None),
            None => (existing.video_href, existing.video_type),
        };

        Event {
            title: self.title.unwrap_or(existing.title),
            description: self.description.unwrap_or(existing.description),
            location: self.location.unwrap_or(existing.location),
            event_date: self.event_date.unwrap_or(existing.event_date),
            image: self.image.unwrap_or(existing.image),
            video_href,
            video_type,
            active: self.active.unwrap_or(existing.active),
            display_order: self.display_order.unwrap_or(existing.display_order),
            ..existing
        }
    }
}

pub async fn admin_update_event(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AdminUpdateEventRequest>,
) -> Result<Json<AdminItemResponse<AdminEventResponse>>, AppError> {
    let changes = EventChanges::validate(req)?;

    let existing: Event = sqlx::query_as("SELECT * FROM events WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let merged = changes.apply(existing);

    let event: Event = sqlx::query_as(
        r#"
        UPDATE events
        SET title = $1, description = $2, location = $3, event_date = $4, image = $5, video_href = $6, video_type = $7, active = $8, display_order = $9, updated_at = NOW()
        WHERE id = $10
        RETURNING *
        "#,
    )
    .bind(&merged.title)
    .bind(&merged.description)
    .bind(&merged.location)
    .bind(merged.event_date)
    .bind(&merged.image)
    .bind(&merged.video_href)
    .bind(&merged.video_type)
    .bind(merged.active)
    .bind(merged.display_order)
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(AdminItemResponse { item: event.into() }))
}
