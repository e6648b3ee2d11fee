use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Order {
    pub id: i32,
    pub status_id: Option<i32>,
    pub start_address: String,
    pub end_address: String,
    pub cost: f64,
    pub user_id: Option<i32>,
    pub dispatcher_id: Option<i32>,
    pub driver_id: Option<i32>,
}
