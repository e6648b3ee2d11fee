use common::error::Res;
use common::validate;
use serde::Deserialize;

use super::auth::default_password;

fn default_name() -> String {
    "name".to_string()
}

fn default_surname() -> String {
    "surname".to_string()
}

fn default_phone() -> String {
    validate::PHONE_PLACEHOLDER.to_string()
}

fn default_true() -> bool {
    true
}

/// Create/update schema for the users collection. Every field except the
/// email carries a fixed default so that partially-specified payloads still
/// produce a valid row.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub email: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_surname")]
    pub surname: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_phone")]
    pub phone_number: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_verified: bool,
}

impl UserPayload {
    pub fn validate(&self) -> Res<()> {
        validate::email(&self.email)?;
        validate::phone_number(&self.phone_number)?;
        validate::password(&self.password)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_is_backfilled_with_defaults() {
        let payload: UserPayload = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(payload.name, "name");
        assert_eq!(payload.surname, "surname");
        assert_eq!(payload.password, "12345");
        assert_eq!(payload.phone_number, "+7 (XXX) XXX-XX-XX");
        assert!(payload.is_active);
        assert!(!payload.is_superuser);
        assert!(!payload.is_verified);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn flags_can_be_overridden() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"email":"a@x.com","is_superuser":true,"is_active":false}"#)
                .unwrap();
        assert!(!payload.is_active);
        assert!(payload.is_superuser);
    }

    #[test]
    fn bad_email_is_rejected_before_persistence() {
        let payload: UserPayload = serde_json::from_str(r#"{"email":"nope"}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"email":"a@x.com","password":"123"}"#).unwrap();
        assert!(payload.validate().is_err());
    }
}
