use axum::{Json, extract::State};

use crate::{AppState, error::AppError, models::*};

pub async fn get_showcases(
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<ShowcaseResponse>>, AppError> {
    let rows: Vec<Showcase> =
        sqlx::query_as("SELECT * FROM showcases WHERE active = true ORDER BY display_order, id")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(ItemsResponse {
        items: rows.into_iter().map(ShowcaseResponse::from).collect(),
    }))
}
