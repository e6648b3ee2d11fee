use common::error::Res;
use common::validate;
use db::dtos::dispatcher::NewDispatcher;
use serde::Deserialize;

pub(crate) fn default_name() -> String {
    "testname".to_string()
}

pub(crate) fn default_surname() -> String {
    "testsurname".to_string()
}

pub(crate) fn default_email() -> String {
    "test@mail.com".to_string()
}

pub(crate) fn default_password() -> String {
    "12345".to_string()
}

pub(crate) fn default_phone() -> String {
    validate::PHONE_PLACEHOLDER.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DispatcherPayload {
    pub id: Option<i32>,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_surname")]
    pub surname: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_phone")]
    pub phone_number: String,
}

impl DispatcherPayload {
    pub fn validate(&self) -> Res<()> {
        validate::email(&self.email)?;
        validate::phone_number(&self.phone_number)?;
        validate::password(&self.password)?;
        Ok(())
    }

    pub fn to_new_dispatcher(&self) -> NewDispatcher {
        NewDispatcher {
            id: self.id,
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_produces_a_valid_row() {
        let payload: DispatcherPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.email, "test@mail.com");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn invalid_email_is_rejected() {
        let payload: DispatcherPayload = serde_json::from_str(r#"{"email":"nope"}"#).unwrap();
        assert!(payload.validate().is_err());
    }
}
