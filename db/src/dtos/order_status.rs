use serde::Deserialize;

use crate::dtos::page::default_step;

#[derive(Debug, Clone, Deserialize)]
pub struct OrderStatusFilter {
    #[serde(default)]
    pub start: i64,
    #[serde(default = "default_step")]
    pub step: i64,
    pub order_status_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewOrderStatus {
    pub id: Option<i32>,
    pub status: String,
}
