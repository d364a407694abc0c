use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, auth::AdminUser, error::AppError, models::*};

pub async fn admin_patch_team_member_active(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AdminActiveRequest>,
) -> Result<Json<AdminItemResponse<AdminTeamMemberResponse>>, AppError> {
    let row: TeamMember = sqlx::query_as(
        "UPDATE team_members SET active = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
    )
    .bind(req.active)
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(AdminItemResponse { item: row.into() }))
}
