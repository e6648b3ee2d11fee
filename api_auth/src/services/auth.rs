use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier},
};
use common::error::{AppError, Res};
use db::models::token::AccessToken;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::auth::LoginRequest;

pub fn hash_password(plaintext: &str) -> Res<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Validation(format!("Failed to hash password: {e}")))
}

pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// An opaque session credential: a fresh UUIDv4 string, globally unique
/// across all issued tokens.
pub fn generate_token() -> String {
    Uuid::new_v4().to_string()
}

/// Verifies the supplied credentials and issues a fresh access token.
///
/// An unknown email is a 404, a wrong password a 401. On success the user's
/// token row is written through an upsert: a re-login replaces the previous
/// token value in place, so the superseded token stops authorizing.
pub async fn login(pool: &PgPool, login_data: &LoginRequest) -> Res<AccessToken> {
    let user = db::user::get_by_email(pool, &login_data.email)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("User with email {} not found", login_data.email))
        })?;

    if !verify_password(&login_data.password, &user.hashed_password) {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token_value = generate_token();
    db::token::upsert(pool, user.id, &token_value).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("pw12345").unwrap();
        assert_ne!(hash, "pw12345");
        assert!(verify_password("pw12345", &hash));
        assert!(!verify_password("pw12346", &hash));
    }

    #[test]
    fn garbage_stored_hash_never_verifies() {
        assert!(!verify_password("pw12345", "not-a-phc-string"));
    }

    #[test]
    fn generated_tokens_are_unique() {
        let first = generate_token();
        let second = generate_token();
        assert_ne!(first, second);
        assert_eq!(first.len(), 36);
    }
}
