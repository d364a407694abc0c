use axum::{Json, extract::State};

use crate::{AppState, auth::AdminUser, error::AppError, models::*, validation};

pub async fn admin_create_service_detail(
    _auth: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<AdminCreateServiceDetailRequest>,
) -> Result<Json<AdminItemResponse<AdminServiceDetailResponse>>, AppError> {
    let title = validation::required_text("título", &req.title)?;
    let description = validation::required_text("descrição", &req.description)?;
    let image = validation::optional_image_reference(req.image)?;
    let active = req.active.unwrap_or(true);

    // Concurrent creates may share a display_order; lists break ties by id
    let detail: ServiceDetail = sqlx::query_as(
        r#"
        INSERT INTO service_details (title, description, image, active, display_order, created_at, updated_at)
        VALUES ($1, $2, $3, $4, COALESCE($5, (SELECT COALESCE(MAX(display_order), 0) + 1 FROM service_details)), NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&title)
    .bind(&description)
    .bind(&image)
    .bind(active)
    .bind(req.display_order)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(AdminItemResponse { item: detail.into() }))
}
