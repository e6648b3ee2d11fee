use common::error::Res;
use common::validate;
use db::dtos::order::NewOrder;
use serde::Deserialize;

fn default_cost() -> f64 {
    1000.0
}

/// Create/update schema for orders. The addresses and the referenced
/// user/status are required; the cost falls back to a fixed default so a
/// partially-specified payload still produces a valid row.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderPayload {
    pub id: Option<i32>,
    pub status_id: i32,
    pub start_address: String,
    pub end_address: String,
    #[serde(default = "default_cost")]
    pub cost: f64,
    pub user_id: i32,
    pub dispatcher_id: Option<i32>,
    pub driver_id: Option<i32>,
}

impl OrderPayload {
    pub fn validate(&self) -> Res<()> {
        validate::positive_cost(self.cost)?;
        if let Some(dispatcher_id) = self.dispatcher_id {
            validate::positive_id("dispatcher_id", dispatcher_id)?;
        }
        if let Some(driver_id) = self.driver_id {
            validate::positive_id("driver_id", driver_id)?;
        }
        Ok(())
    }

    pub fn to_new_order(&self) -> NewOrder {
        NewOrder {
            id: self.id,
            status_id: self.status_id,
            start_address: self.start_address.clone(),
            end_address: self.end_address.clone(),
            cost: self.cost,
            user_id: self.user_id,
            dispatcher_id: self.dispatcher_id,
            driver_id: self.driver_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> OrderPayload {
        serde_json::from_str(
            r#"{"status_id":1,"start_address":"A","end_address":"B","user_id":1}"#,
        )
        .unwrap()
    }

    #[test]
    fn cost_defaults_to_one_thousand() {
        let payload = minimal();
        assert_eq!(payload.cost, 1000.0);
        assert!(payload.id.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn non_positive_cost_is_rejected() {
        let mut payload = minimal();
        payload.cost = 0.0;
        assert!(payload.validate().is_err());
        payload.cost = -1.0;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn non_positive_references_are_rejected() {
        let mut payload = minimal();
        payload.driver_id = Some(0);
        assert!(payload.validate().is_err());
    }
}
