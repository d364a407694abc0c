use axum::{Json, extract::State};

use crate::{AppState, error::AppError, models::*};

pub async fn get_team_members(
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<TeamMemberResponse>>, AppError> {
    let rows: Vec<TeamMember> =
        sqlx::query_as("SELECT * FROM team_members WHERE active = true ORDER BY display_order, id")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(ItemsResponse {
        items: rows.into_iter().map(TeamMemberResponse::from).collect(),
    }))
}
