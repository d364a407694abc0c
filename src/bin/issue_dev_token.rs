use stagecraft_backend::{auth::create_token, config::AuthConfig};

// Signs a token the way the identity provider would, for local testing.
// Usage: issue_dev_token <subject> [role] [hours]
fn main() {
    dotenvy::dotenv().ok();

    let config = AuthConfig::from_env().expect("AUTH_JWT_SECRET must be set");

    let mut args = std::env::args().skip(1);
    let subject = args.next().unwrap_or_else(|| "dev-user".to_string());
    let role = args.next().unwrap_or_else(|| config.admin_role.clone());
    let hours: i64 = args
        .next()
        .map(|h| h.parse().expect("hours must be an integer"))
        .unwrap_or(12);

    let token = create_token(&subject, None, &role, time::Duration::hours(hours), &config)
        .expect("failed to sign token");
    println!("{token}");
}
