use serde::Serialize;

/// One authenticated session credential. The `tokens_user_id_key`
/// constraint keeps this at zero-or-one rows per user; a re-login replaces
/// `access_token` in place.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct AccessToken {
    pub id: i32,
    pub access_token: String,
    pub user_id: i32,
}
