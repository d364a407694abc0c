use axum::Json;

use crate::{auth::AdminUser, media::VideoReference, models::*};

/// Lets the showcase form show the derived type while the operator is still
/// typing. Nothing is persisted.
pub async fn admin_classify_video_reference(
    _auth: AdminUser,
    Json(req): Json<AdminVideoReferenceRequest>,
) -> Json<AdminVideoReferenceResponse> {
    let reference = VideoReference::from_raw(&req.href);
    let valid = reference.is_valid();

    Json(AdminVideoReferenceResponse { reference, valid })
}
