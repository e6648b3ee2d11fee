use serde::{Deserialize, Serialize};

pub(crate) fn default_password() -> String {
    "12345".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default = "default_password")]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_password_is_backfilled_with_the_schema_default() {
        let req: LoginRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.password, "12345");
    }
}
