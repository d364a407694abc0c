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

struct ServiceDetailChanges {
    title: Option<String>,
    description: Option<String>,
    image: Clearable<String>,
    active: Option<bool>,
    display_order: Option<i32>,
}

impl ServiceDetailChanges {
    fn validate(req: AdminUpdateServiceDetailRequest) -> Result<Self, AppError> {
        Ok(Self {
            title: validation::optional_required_text("título", req.title)?,
            description: validation::optional_required_text("descrição", req.description)?,
            image: validation::clearable_image_reference(req.image)?,
            active: req.active,
            display_order: req.display_order,
        })
    }

    fn apply(self, existing: ServiceDetail) -> ServiceDetail {
        ServiceDetail {
            title: self.title.unwrap_or(existing.title),
            description: self.description.unwrap_or(existing.description),
            image: self.image.unwrap_or(existing.image),
            active: self.active.unwrap_or(existing.active),
            display_order: self.display_order.unwrap_or(existing.display_order),
            ..existing
        }
    }
}

pub async fn admin_update_service_detail(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AdminUpdateServiceDetailRequest>,
) -> Result<Json<AdminItemResponse<AdminServiceDetailResponse>>, AppError> {
    let changes = ServiceDetailChanges::validate(req)?;

    let existing: ServiceDetail = sqlx::query_as("SELECT * FROM service_details WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let merged = changes.apply(existing);

    let detail: ServiceDetail = sqlx::query_as(
        r#"
        UPDATE service_details
        SET title = $1, description = $2, image = $3, active = $4, display_order = $5, updated_at = NOW()
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(&merged.title)
    .bind(&merged.description)
    .bind(&merged.image)
    .bind(merged.active)
    .bind(merged.display_order)
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(AdminItemResponse { item: detail.into() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::INVALID_IMAGE_MESSAGE;

    fn stored() -> ServiceDetail {
        let now = time::OffsetDateTime::UNIX_EPOCH;
        ServiceDetail {
            id: 8,
            title: "Som".to_string(),
            description: "Sonorização completa".to_string(),
            image: Some("https://cdn.example.com/som.jpg".to_string()),
            active: false,
            display_order: 6,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn image_can_be_removed() {
        let req: AdminUpdateServiceDetailRequest =
            serde_json::from_value(serde_json::json!({ "image": "" })).unwrap();
        let detail = ServiceDetailChanges::validate(req).unwrap().apply(stored());
        assert!(detail.image.is_none());
        assert_eq!(detail.title, "Som");
        assert!(!detail.active);
    }

    #[test]
    fn replacement_image_is_validated() {
        let req: AdminUpdateServiceDetailRequest =
            serde_json::from_value(serde_json::json!({ "image": "som.jpg" })).unwrap();
        match ServiceDetailChanges::validate(req) {
            Err(AppError::BadRequest(message)) => assert_eq!(message, INVALID_IMAGE_MESSAGE),
            Err(other) => panic!("expected BadRequest, got {other:?}"),
            Ok(_) => panic!("expected a rejection"),
        }
    }
}
