use axum::Json;

use crate::{auth::AuthUser, models::*};

pub async fn get_current_user(auth: AuthUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        user_id: auth.user_id,
        email: auth.email,
        role: auth.role,
    })
}
