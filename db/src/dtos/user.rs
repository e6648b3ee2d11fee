use serde::Deserialize;

use crate::dtos::page::default_step;

#[derive(Debug, Clone, Deserialize)]
pub struct UserFilter {
    #[serde(default)]
    pub start: i64,
    #[serde(default = "default_step")]
    pub step: i64,
    pub user_id: Option<i32>,
}

/// Storage-facing new-row payload. The password is already hashed by the
/// caller; plaintext never crosses this boundary.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub hashed_password: String,
    pub phone_number: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
}
