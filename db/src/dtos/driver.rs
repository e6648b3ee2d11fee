use serde::Deserialize;

use crate::dtos::page::default_step;

#[derive(Debug, Clone, Deserialize)]
pub struct DriverFilter {
    #[serde(default)]
    pub start: i64,
    #[serde(default = "default_step")]
    pub step: i64,
    pub driver_id: Option<i32>,
    pub dispatcher_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewDriver {
    pub id: Option<i32>,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub dispatcher_id: Option<i32>,
}
