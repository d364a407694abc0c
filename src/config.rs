use std::{fmt, path::PathBuf};

use anyhow::{Context, bail};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
    pub upload_dir: PathBuf,
    pub cors_origin: Option<String>,
}

/// Settings for verifying tokens issued by the identity provider.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub admin_role: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("admin_role", &self.admin_role)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = required(&lookup, "DATABASE_URL")?;

        let port = match non_empty(&lookup, "PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?,
            None => 8080,
        };

        let upload_dir = non_empty(&lookup, "UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("uploads"));

        let cors_origin = non_empty(&lookup, "CORS_ORIGIN");
        if let Some(origin) = &cors_origin {
            if origin.parse::<axum::http::HeaderValue>().is_err() {
                bail!("CORS_ORIGIN is not a valid header value: {origin:?}");
            }
        }

        Ok(Self {
            database_url,
            port,
            auth: AuthConfig::from_lookup(&lookup)?,
            upload_dir,
            cors_origin,
        })
    }
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            jwt_secret: required(&lookup, "AUTH_JWT_SECRET")?,
            issuer: non_empty(&lookup, "AUTH_ISSUER"),
            admin_role: non_empty(&lookup, "ADMIN_ROLE").unwrap_or_else(|| "admin".to_string()),
        })
    }
}

fn non_empty(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(lookup: impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<String> {
    non_empty(lookup, key).with_context(|| format!("{key} must be set"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(env(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("AUTH_JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.auth.admin_role, "admin");
        assert!(config.auth.issuer.is_none());
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(env(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("AUTH_JWT_SECRET", "secret"),
            ("PORT", "3001"),
            ("UPLOAD_DIR", "/var/site/uploads"),
            ("ADMIN_ROLE", "editor"),
            ("AUTH_ISSUER", "https://id.example.com"),
            ("CORS_ORIGIN", "https://example.com"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.upload_dir, PathBuf::from("/var/site/uploads"));
        assert_eq!(config.auth.admin_role, "editor");
        assert_eq!(config.auth.issuer.as_deref(), Some("https://id.example.com"));
        assert_eq!(config.cors_origin.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn missing_required_values_fail() {
        let err = Config::from_lookup(env(&[("AUTH_JWT_SECRET", "secret")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));

        let err = Config::from_lookup(env(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("AUTH_JWT_SECRET", "  "),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("AUTH_JWT_SECRET"));
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(env(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("AUTH_JWT_SECRET", "secret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn debug_output_hides_secret() {
        let auth = AuthConfig::from_lookup(env(&[("AUTH_JWT_SECRET", "top-secret")])).unwrap();
        assert!(!format!("{auth:?}").contains("top-secret"));
    }
}
