use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use super::error::Res;

/// Uniform response wrapper used by every endpoint, success and error alike.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub status_code: u16,
    pub data: Option<T>,
    pub details: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(status_code: u16, data: T) -> Self {
        Envelope {
            status: "success".to_string(),
            status_code,
            data: Some(data),
            details: None,
        }
    }
}

impl<T> Envelope<T> {
    pub fn error(status_code: u16, details: String) -> Self {
        Envelope {
            status: "error".to_string(),
            status_code,
            data: None,
            details: Some(details),
        }
    }
}

pub struct Success;
impl Success {
    pub fn created<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Created().json(Envelope::success(201, body)))
    }
    pub fn ok<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().json(Envelope::success(200, body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_serializes_with_null_details() {
        let envelope = Envelope::success(200, vec![1, 2, 3]);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "success",
                "status_code": 200,
                "data": [1, 2, 3],
                "details": null,
            })
        );
    }

    #[test]
    fn error_envelope_serializes_with_null_data() {
        let envelope = Envelope::<()>::error(404, "Nothing matched".to_string());
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "error",
                "status_code": 404,
                "data": null,
                "details": "Nothing matched",
            })
        );
    }
}
