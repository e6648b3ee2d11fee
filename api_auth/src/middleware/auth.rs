use std::{future::Future, pin::Pin, sync::Arc};

use actix_web::{
    Error, HttpMessage, HttpResponse,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use common::http::Envelope;
use futures::future::{Ready, ok};
use sqlx::PgPool;

/// Resolves the bearer token on every request of a protected scope to the
/// owning user's identity and stores it in the request extensions. Requests
/// without a matching token row are rejected with a 401 envelope.
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn new() -> Self {
        AuthMiddleware
    }
}

impl Default for AuthMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Arc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token_value = extract_bearer(
            req.headers()
                .get("Authorization")
                .and_then(|header| header.to_str().ok()),
        );

        let pool = req
            .app_data::<web::Data<Arc<PgPool>>>()
            .map(|data| data.clone());

        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            let Some(pool) = pool else {
                let response = HttpResponse::InternalServerError()
                    .json(Envelope::<()>::error(
                        500,
                        "Database pool is not configured".to_string(),
                    ))
                    .map_into_boxed_body();
                return Ok(req.into_response(response));
            };

            let Some(token) = token_value else {
                // no token passed - 401
                let response = HttpResponse::Unauthorized()
                    .json(Envelope::<()>::error(
                        401,
                        "No authorization token provided".to_string(),
                    ))
                    .map_into_boxed_body();
                return Ok(req.into_response(response));
            };

            match db::token::find_identity(&***pool, &token).await {
                Ok(Some(identity)) => {
                    req.extensions_mut().insert(identity);
                    srv.call(req).await.map(|res| res.map_into_boxed_body())
                }
                Ok(None) => {
                    let response = HttpResponse::Unauthorized()
                        .json(Envelope::<()>::error(
                            401,
                            "Invalid or superseded access token".to_string(),
                        ))
                        .map_into_boxed_body();
                    Ok(req.into_response(response))
                }
                Err(err) => {
                    let response = err.to_http_response().map_into_boxed_body();
                    Ok(req.into_response(response))
                }
            }
        })
    }
}

/// Pulls the opaque token out of an `Authorization: Bearer <token>` header.
pub(crate) fn extract_bearer(header: Option<&str>) -> Option<String> {
    header?.strip_prefix("Bearer ").map(|token| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_stripped() {
        assert_eq!(
            extract_bearer(Some("Bearer abc-123")),
            Some("abc-123".to_string())
        );
    }

    #[test]
    fn other_schemes_and_missing_headers_yield_none() {
        assert_eq!(extract_bearer(Some("Basic dXNlcjpwdw==")), None);
        assert_eq!(extract_bearer(Some("abc-123")), None);
        assert_eq!(extract_bearer(None), None);
    }
}
