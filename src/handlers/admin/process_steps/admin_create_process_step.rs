use axum::{Json, extract::State};

use crate::{AppState, auth::AdminUser, error::AppError, models::*, validation};

pub async fn admin_create_process_step(
    _auth: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<AdminCreateProcessStepRequest>,
) -> Result<Json<AdminItemResponse<AdminProcessStepResponse>>, AppError> {
    let title = validation::required_text("título", &req.title)?;
    let description = validation::required_text("descrição", &req.description)?;
    let icon = validation::optional_text(req.icon);
    let active = req.active.unwrap_or(true);

    // Concurrent creates may share a display_order; lists break ties by id
    let step: ProcessStep = sqlx::query_as(
        r#"
        INSERT INTO process_steps (title, description, icon, active, display_order, created_at, updated_at)
        VALUES ($1, $2, $3, $4, COALESCE($5, (SELECT COALESCE(MAX(display_order), 0) + 1 FROM process_steps)), NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&title)
    .bind(&description)
    .bind(&icon)
    .bind(active)
    .bind(req.display_order)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(AdminItemResponse { item: step.into() }))
}
