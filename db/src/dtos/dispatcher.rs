use serde::Deserialize;

use crate::dtos::page::default_step;

#[derive(Debug, Clone, Deserialize)]
pub struct DispatcherFilter {
    #[serde(default)]
    pub start: i64,
    #[serde(default = "default_step")]
    pub step: i64,
    pub dispatcher_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewDispatcher {
    pub id: Option<i32>,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}
