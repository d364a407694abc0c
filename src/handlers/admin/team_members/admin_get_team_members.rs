use axum::{
    Json,
    extract::{Query, State},
};

use crate::{AppState, auth::AdminUser, error::AppError, models::*};

pub async fn admin_get_team_members(
    _auth: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<AdminActiveQuery>,
) -> Result<Json<AdminItemsResponse<AdminTeamMemberResponse>>, AppError> {
    let include_inactive = query.include_inactive.unwrap_or(false);

    let sql = if include_inactive {
        "SELECT * FROM team_members ORDER BY display_order, id"
    } else {
        "SELECT * FROM team_members WHERE active = true ORDER BY display_order, id"
    };

    let rows: Vec<TeamMember> = sqlx::query_as(sql).fetch_all(&state.pool).await?;

    Ok(Json(AdminItemsResponse {
        items: rows.into_iter().map(AdminTeamMemberResponse::from).collect(),
    }))
}
