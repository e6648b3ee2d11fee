use db::dtos::order_status::NewOrderStatus;
use serde::Deserialize;

fn default_status() -> String {
    "new status".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderStatusPayload {
    pub id: Option<i32>,
    #[serde(default = "default_status")]
    pub status: String,
}

impl OrderStatusPayload {
    pub fn to_new_order_status(&self) -> NewOrderStatus {
        NewOrderStatus {
            id: self.id,
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_when_absent() {
        let payload: OrderStatusPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.status, "new status");
        assert!(payload.id.is_none());
    }
}
