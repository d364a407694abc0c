use axum::{Json, extract::State};

use crate::{AppState, error::AppError, models::*};

pub async fn get_service_details(
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<ServiceDetailResponse>>, AppError> {
    let rows: Vec<ServiceDetail> =
        sqlx::query_as("SELECT * FROM service_details WHERE active = true ORDER BY display_order, id")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(ItemsResponse {
        items: rows.into_iter().map(ServiceDetailResponse::from).collect(),
    }))
}
