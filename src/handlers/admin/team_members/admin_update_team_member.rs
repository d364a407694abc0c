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

struct TeamMemberChanges {
    name: Option<String>,
    position: Option<String>,
    bio: Clearable<String>,
    image: Clearable<String>,
    active: Option<bool>,
    display_order: Option<i32>,
}

impl TeamMemberChanges {
    fn validate(req: AdminUpdateTeamMemberRequest) -> Result<Self, AppError> {
        Ok(Self {
            name: validation::optional_required_text("nome", req.name)?,
            position: validation::optional_required_text("cargo", req.position)?,
            bio: validation::clearable_text(req.bio),
            image: validation::clearable_image_reference(req.image)?,
            active: req.active,
            display_order: req.display_order,
        })
    }

    fn apply(self, existing: TeamMember) -> TeamMember {
        TeamMember {
            name: self.name.unwrap_or(existing.name),
            position: self.position.unwrap_or(existing.position),
            bio: self.bio.unwrap_or(existing.bio),
            image: self.image.unwrap_or(existing.image),
            active: self.active.unwrap_or(existing.active),
            display_order: self.display_order.unwrap_or(existing.display_order),
            ..existing
        }
    }
}

pub async fn admin_update_team_member(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AdminUpdateTeamMemberRequest>,
) -> Result<Json<AdminItemResponse<AdminTeamMemberResponse>>, AppError> {
    let changes = TeamMemberChanges::validate(req)?;

    let existing: TeamMember = sqlx::query_as("SELECT * FROM team_members WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let merged = changes.apply(existing);

    let member: TeamMember = sqlx::query_as(
        r#"
        UPDATE team_members
        SET name = $1, position = $2, bio = $3, image = $4, active = $5, display_order = $6, updated_at = NOW()
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(&merged.name)
    .bind(&merged.position)
    .bind(&merged.bio)
    .bind(&merged.image)
    .bind(merged.active)
    .bind(merged.display_order)
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(AdminItemResponse { item: member.into() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> TeamMember {
        let now = time::OffsetDateTime::UNIX_EPOCH;
        TeamMember {
            id: 5,
            name: "Ana Souza".to_string(),
            position: "Diretora de palco".to_string(),
            bio: Some("Quinze anos de turnê".to_string()),
            image: Some("/images/ana.jpg".to_string()),
            active: true,
            display_order: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(body: serde_json::Value) -> TeamMember {
        let req: AdminUpdateTeamMemberRequest = serde_json::from_value(body).unwrap();
        TeamMemberChanges::validate(req).unwrap().apply(stored())
    }

    #[test]
    fn photo_and_bio_can_be_removed() {
        let member = apply(serde_json::json!({ "bio": "", "image": " " }));
        assert!(member.bio.is_none());
        assert!(member.image.is_none());
        assert_eq!(member.name, "Ana Souza");
    }

    #[test]
    fn untouched_fields_survive_a_rename() {
        let member = apply(serde_json::json!({ "position": " Produtora ", "active": false }));
        assert_eq!(member.position, "Produtora");
        assert!(!member.active);
        assert_eq!(member.bio.as_deref(), Some("Quinze anos de turnê"));
        assert_eq!(member.image.as_deref(), Some("/images/ana.jpg"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let req: AdminUpdateTeamMemberRequest =
            serde_json::from_value(serde_json::json!({ "name": "" })).unwrap();
        assert!(matches!(
            TeamMemberChanges::validate(req),
            Err(AppError::BadRequest(_))
        ));
    }
}
