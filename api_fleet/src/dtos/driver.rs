use common::error::Res;
use common::validate;
use db::dtos::driver::NewDriver;
use serde::Deserialize;

use super::dispatcher::{default_email, default_name, default_password, default_phone, default_surname};

fn default_dispatcher() -> Option<i32> {
    Some(1)
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriverPayload {
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
    #[serde(default = "default_dispatcher")]
    pub dispatcher_id: Option<i32>,
}

impl DriverPayload {
    pub fn validate(&self) -> Res<()> {
        validate::email(&self.email)?;
        validate::phone_number(&self.phone_number)?;
        validate::password(&self.password)?;
        if let Some(dispatcher_id) = self.dispatcher_id {
            validate::positive_id("dispatcher_id", dispatcher_id)?;
        }
        Ok(())
    }

    pub fn to_new_driver(&self) -> NewDriver {
        NewDriver {
            id: self.id,
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone_number: self.phone_number.clone(),
            dispatcher_id: self.dispatcher_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_backfilled_with_defaults() {
        let payload: DriverPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.name, "testname");
        assert_eq!(payload.surname, "testsurname");
        assert_eq!(payload.email, "test@mail.com");
        assert_eq!(payload.password, "12345");
        assert_eq!(payload.phone_number, "+7 (XXX) XXX-XX-XX");
        assert_eq!(payload.dispatcher_id, Some(1));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn explicit_fields_win_over_defaults() {
        let payload: DriverPayload = serde_json::from_str(
            r#"{"name":"Ivan","phone_number":"+7 (912) 345-67-89","dispatcher_id":7}"#,
        )
        .unwrap();
        assert_eq!(payload.name, "Ivan");
        assert_eq!(payload.phone_number, "+7 (912) 345-67-89");
        assert_eq!(payload.dispatcher_id, Some(7));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn malformed_phone_is_rejected() {
        let payload: DriverPayload =
            serde_json::from_str(r#"{"phone_number":"89123456789"}"#).unwrap();
        assert!(payload.validate().is_err());
    }
}
