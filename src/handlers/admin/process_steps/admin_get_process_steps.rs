use axum::{
    Json,
    extract::{Query, State},
};

use crate::{AppState, auth::AdminUser, error::AppError, models::*};

pub async fn admin_get_process_steps(
    _auth: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<AdminActiveQuery>,
) -> Result<Json<AdminItemsResponse<AdminProcessStepResponse>>, AppError> {
    let include_inactive = query.include_inactive.unwrap_or(false);

    let sql = if include_inactive {
        "SELECT * FROM process_steps ORDER BY display_order, id"
    } else {
        "SELECT * FROM process_steps WHERE active = true ORDER BY display_order, id"
    };

    let rows: Vec<ProcessStep> = sqlx::query_as(sql).fetch_all(&state.pool).await?;

    Ok(Json(AdminItemsResponse {
        items: rows.into_iter().map(AdminProcessStepResponse::from).collect(),
    }))
}
