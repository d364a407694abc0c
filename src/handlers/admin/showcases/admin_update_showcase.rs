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

// Image and video are required on a showcase, so blanks there are rejected
// rather than cleared.
struct ShowcaseChanges {
    title: Option<String>,
    description: Clearable<String>,
    image: Option<String>,
    video: Option<VideoReference>,
    active: Option<bool>,
    display_order: Option<i32>,
}

impl ShowcaseChanges {
    fn validate(req: AdminUpdateShowcaseRequest) -> Result<Self, AppError> {
        Ok(Self {
            title: validation::optional_required_text("título", req.title)?,
            description: validation::clearable_text(req.description),
            image: validation::optional_image_reference(req.image)?,
            video: validation::optional_video_reference(req.href)?,
            active: req.active,
            display_order: req.display_order,
        })
    }

    fn apply(self, existing: Showcase) -> Showcase {
        let (href, video_type) = match self.video {
            Some(reference) => {
                let (href, kind) = reference.into_parts();
                (href, kind.as_str().to_string())
            }
            None => (existing.href, existing.video_type),
        };

        Showcase {
            title: self.title.unwrap_or(existing.title),
            description: self.description.unwrap_or(existing.description),
            image: self.image.unwrap_or(existing.image),
            href,
            video_type,
            active: self.active.unwrap_or(existing.active),
            display_order: self.display_order.unwrap_or(existing.display_order),
            ..existing
        }
    }
}

pub async fn admin_update_showcase(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AdminUpdateShowcaseRequest>,
) -> Result<Json<AdminItemResponse<AdminShowcaseResponse>>, AppError> {
    // Reject bad input before touching the database
    let changes = ShowcaseChanges::validate(req)?;

    let existing: Showcase = sqlx::query_as("SELECT * FROM showcases WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let merged = changes.apply(existing);

    let showcase: Showcase = sqlx::query_as(
        r#"
        UPDATE showcases
        SET title = $1, description = $2, image = $3, href = $4, video_type = $5, active = $6, display_order = $7, updated_at = NOW()
        WHERE id = $8
        RETURNING *
        "#,
    )
    .bind(&merged.title)
    .bind(&merged.description)
    .bind(&merged.image)
    .bind(&merged.href)
    .bind(&merged.video_type)
    .bind(merged.active)
    .bind(merged.display_order)
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(AdminItemResponse {
        item: showcase.into(),
    }))
}
