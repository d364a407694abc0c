use axum::{Json, extract::State};

use crate::{AppState, auth::AdminUser, error::AppError, models::*, validation};

pub async fn admin_create_showcase(
    auth: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<AdminCreateShowcaseRequest>,
) -> Result<Json<AdminItemResponse<AdminShowcaseResponse>>, AppError> {
    let title = validation::required_text("título", &req.title)?;
    let image = validation::image_reference(&req.image)?;
    let (href, video_type) = validation::video_reference(&req.href)?.into_parts();
    let description = validation::optional_text(req.description);
    let active = req.active.unwrap_or(true);

    // Concurrent creates may share a display_order; lists break ties by id
    let showcase: Showcase = sqlx::query_as(
        r#"
        INSERT INTO showcases (title, description, image, href, video_type, active, display_order, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, (SELECT COALESCE(MAX(display_order), 0) + 1 FROM showcases)), NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&title)
    .bind(&description)
    .bind(&image)
    .bind(&href)
    .bind(video_type.as_str())
    .bind(active)
    .bind(req.display_order)
    .fetch_one(&state.pool)
    .await?;

    tracing::info!(
        "{} created showcase {} ({})",
        auth.0.user_id,
        showcase.id,
        video_type.as_str()
    );

    Ok(Json(AdminItemResponse {
        item: showcase.into(),
    }))
}
