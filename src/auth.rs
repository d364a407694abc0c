use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{AppState, config::AuthConfig, error::AppError};

/// Claims carried by identity-provider tokens. Only `sub`, `exp` and the
/// role claim matter to this service.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub email: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

pub fn create_token(
    subject: &str,
    email: Option<&str>,
    role: &str,
    ttl: time::Duration,
    config: &AuthConfig,
) -> Result<String, AppError> {
    let claims = Claims {
        sub: subject.to_string(),
        exp: (time::OffsetDateTime::now_utc() + ttl).unix_timestamp(),
        email: email.map(str::to_string),
        role: Some(role.to_string()),
        iss: config.issuer.clone(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(e.into()))
}

pub fn verify_token(token: &str, config: &AuthConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    if let Some(issuer) = &config.issuer {
        validation.set_issuer(&[issuer]);
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::warn!("Rejected bearer token: {}", e);
        AppError::AuthError
    })
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::AuthError)?;
        let claims = verify_token(token, &state.config.auth)?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role.unwrap_or_default(),
        })
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if user.role != state.config.auth.admin_role {
            tracing::warn!(
                "User {} with role {:?} attempted an admin request",
                user.user_id,
                user.role
            );
            return Err(AppError::Forbidden);
        }

        Ok(AdminUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            issuer: None,
            admin_role: "admin".to_string(),
        }
    }

    #[test]
    fn issued_token_verifies() {
        let config = config();
        let token = create_token(
            "user_123",
            Some("ops@example.com"),
            "admin",
            time::Duration::hours(1),
            &config,
        )
        .unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "user_123");
        assert_eq!(claims.email.as_deref(), Some("ops@example.com"));
        assert_eq!(claims.role.as_deref(), Some("admin"));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token("user_123", None, "admin", time::Duration::hours(1), &config())
            .unwrap();

        let other = AuthConfig {
            jwt_secret: "another-secret".to_string(),
            ..config()
        };
        assert!(matches!(verify_token(&token, &other), Err(AppError::AuthError)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = config();
        let token =
            create_token("user_123", None, "admin", time::Duration::hours(-2), &config).unwrap();
        assert!(matches!(verify_token(&token, &config), Err(AppError::AuthError)));
    }

    #[test]
    fn issuer_is_checked_when_configured() {
        let issuing = AuthConfig {
            issuer: Some("https://id.example.com".to_string()),
            ..config()
        };
        let token =
            create_token("user_123", None, "client", time::Duration::hours(1), &issuing).unwrap();
        assert!(verify_token(&token, &issuing).is_ok());

        let expecting_other = AuthConfig {
            issuer: Some("https://elsewhere.example.com".to_string()),
            ..config()
        };
        assert!(verify_token(&token, &expecting_other).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            verify_token("not.a.token", &config()),
            Err(AppError::AuthError)
        ));
    }
}
