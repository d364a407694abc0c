use axum::{Json, extract::State};

use crate::{AppState, error::AppError, models::*};

pub async fn get_process_steps(
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<ProcessStepResponse>>, AppError> {
    let rows: Vec<ProcessStep> =
        sqlx::query_as("SELECT * FROM process_steps WHERE active = true ORDER BY display_order, id")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(ItemsResponse {
        items: rows.into_iter().map(ProcessStepResponse::from).collect(),
    }))
}
