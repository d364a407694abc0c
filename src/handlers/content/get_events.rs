use axum::{Json, extract::State};

use crate::{AppState, error::AppError, models::*};

pub async fn get_events(
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<EventResponse>>, AppError> {
    let rows: Vec<Event> =
        sqlx::query_as("SELECT * FROM events WHERE active = true ORDER BY display_order, id")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(ItemsResponse {
        items: rows.into_iter().map(EventResponse::from).collect(),
    }))
}
