use axum::{Json, extract::State};

use crate::{AppState, auth::AdminUser, error::AppError, models::*, validation};

pub async fn admin_create_team_member(
    _auth: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<AdminCreateTeamMemberRequest>,
) -> Result<Json<AdminItemResponse<AdminTeamMemberResponse>>, AppError> {
    let name = validation::required_text("nome", &req.name)?;
    let position = validation::required_text("cargo", &req.position)?;
    let image = validation::optional_image_reference(req.image)?;
    let bio = validation::optional_text(req.bio);
    let active = req.active.unwrap_or(true);

    // Concurrent creates may share a display_order; lists break ties by id
    let member: TeamMember = sqlx::query_as(
        r#"
        INSERT INTO team_members (name, position, bio, image, active, display_order, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, COALESCE($6, (SELECT COALESCE(MAX(display_order), 0) + 1 FROM team_members)), NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&name)
    .bind(&position)
    .bind(&bio)
    .bind(&image)
    .bind(active)
    .bind(req.display_order)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(AdminItemResponse { item: member.into() }))
}
