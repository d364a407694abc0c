use axum::{
    Json,
    extract::{Multipart, Query, State},
};
use serde::Deserialize;

use crate::{AppState, auth::AdminUser, error::AppError, models::*};

use super::save_uploaded_file::save_uploaded_file;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Image,
    Video,
}

impl UploadKind {
    fn subdirectory(self) -> &'static str {
        match self {
            UploadKind::Image => "images",
            UploadKind::Video => "videos",
        }
    }

    fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            // No svg: uploads are served from the API origin and svg can carry script
            UploadKind::Image => &["jpg", "jpeg", "png", "webp", "gif", "avif"],
            UploadKind::Video => &["mp4", "webm", "mov", "m4v"],
        }
    }

    fn accepts(self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .is_some_and(|ext| self.allowed_extensions().contains(&ext.as_str()))
    }
}

#[derive(Debug, Deserialize)]
pub struct AdminUploadQuery {
    pub kind: UploadKind,
}

pub async fn admin_upload_media(
    auth: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<AdminUploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<AdminUploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InternalError(e.into()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::BadRequest("Arquivo enviado sem nome.".to_string()))?;

        if !query.kind.accepts(&file_name) {
            return Err(AppError::BadRequest(format!(
                "Tipo de arquivo não suportado: {file_name}"
            )));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InternalError(e.into()))?;

        if data.is_empty() {
            return Err(AppError::BadRequest("Arquivo vazio.".to_string()));
        }

        let url = save_uploaded_file(
            &state.config.upload_dir,
            query.kind.subdirectory(),
            &file_name,
            &data,
        )
        .await?;

        tracing::info!("{} uploaded {} ({} bytes)", auth.0.user_id, url, data.len());

        return Ok(Json(AdminUploadResponse { url }));
    }

    Err(AppError::BadRequest(
        "Campo de arquivo 'file' ausente.".to_string(),
    ))
}
