use std::sync::Arc;

use actix_web::{Responder, post, web};
use common::error::Res;
use common::http::Success;
use mailer::Mailer;
use sqlx::PgPool;

use crate::dtos::auth::{LoginRequest, TokenResponse};
use crate::dtos::user::UserPayload;
use crate::services;

/// Registers a new user with email and password authentication.
///
/// # Input
/// - `req`: JSON payload with the registration fields; everything except
///   the email falls back to the schema defaults
/// - `pool`: Database connection pool
/// - `mailer`: Best-effort registration-notification sender
///
/// # Output
/// - Success: the created user (without the password hash), 201 Created
/// - Error: 409 Conflict when the email is already taken
#[post("/register")]
pub async fn post_register(
    req: web::Json<UserPayload>,
    pool: web::Data<Arc<PgPool>>,
    mailer: web::Data<Mailer>,
) -> Res<impl Responder> {
    let user = services::user::register(&pool, &mailer, &req.into_inner()).await?;
    Success::created(user)
}

/// Authenticates a user with email and password and returns a fresh access
/// token. A repeated login supersedes the previously issued token.
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let token = services::auth::login(&pool, &login_data.into_inner()).await?;
    Success::ok(TokenResponse {
        access_token: token.access_token,
    })
}
