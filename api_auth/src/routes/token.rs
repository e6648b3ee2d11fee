use std::sync::Arc;

use actix_web::{Responder, post, web};
use common::error::Res;
use common::http::Success;
use sqlx::PgPool;

use crate::dtos::auth::{LoginRequest, TokenResponse};
use crate::services;

/// Token creation endpoint of the tokens collection. The collection exposes
/// no other operations; a token is superseded by a later login, never
/// listed or deleted.
#[post("")]
pub async fn post_create_token(
    login_data: web::Json<LoginRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let token = services::auth::login(&pool, &login_data.into_inner()).await?;
    Success::ok(TokenResponse {
        access_token: token.access_token,
    })
}
