use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct OrderStatus {
    pub id: i32,
    pub status: String,
}
