use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
    validation::{self, Clearable},
};

struct ProcessStepChanges {
    title: Option<String>,
    description: Option<String>,
    icon: Clearable<String>,
    active: Option<bool>,
    display_order: Option<i32>,
}

impl ProcessStepChanges {
    fn validate(req: AdminUpdateProcessStepRequest) -> Result<Self, AppError> {
        Ok(Self {
            title: validation::optional_required_text("título", req.title)?,
            description: validation::optional_required_text("descrição", req.description)?,
            icon: validation::clearable_text(req.icon),
            active: req.active,
            display_order: req.display_order,
        })
    }

    fn apply(self, existing: ProcessStep) -> ProcessStep {
        ProcessStep {
            title: self.title.unwrap_or(existing.title),
            description: self.description.unwrap_or(existing.description),
            icon: self.icon.unwrap_or(existing.icon),
            active: self.active.unwrap_or(existing.active),
            display_order: self.display_order.unwrap_or(existing.display_order),
            ..existing
        }
    }
}

pub async fn admin_update_process_step(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AdminUpdateProcessStepRequest>,
) -> Result<Json<AdminItemResponse<AdminProcessStepResponse>>, AppError> {
    let changes = ProcessStepChanges::validate(req)?;

    let existing: ProcessStep = sqlx::query_as("SELECT * FROM process_steps WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let merged = changes.apply(existing);

    let step: ProcessStep = sqlx::query_as(
        r#"
        UPDATE process_steps
        SET title = $1, description = $2, icon = $3, active = $4, display_order = $5, updated_at = NOW()
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(&merged.title)
    .bind(&merged.description)
    .bind(&merged.icon)
    .bind(merged.active)
    .bind(merged.display_order)
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(AdminItemResponse { item: step.into() }))
}
