use serde::Deserialize;

use crate::dtos::page::default_step;

#[derive(Debug, Clone, Deserialize)]
pub struct OrderFilter {
    #[serde(default)]
    pub start: i64,
    #[serde(default = "default_step")]
    pub step: i64,
    pub order_id: Option<i32>,
    pub user_id: Option<i32>,
    pub status_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Explicit primary key; absent means the store assigns one.
    pub id: Option<i32>,
    pub status_id: i32,
    pub start_address: String,
    pub end_address: String,
    pub cost: f64,
    pub user_id: i32,
    pub dispatcher_id: Option<i32>,
    pub driver_id: Option<i32>,
}
