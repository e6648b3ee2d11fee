use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::error::Res;
use common::http::Success;
use db::dtos::user::UserFilter;
use db::models::user::Identity;
use mailer::Mailer;
use sqlx::PgPool;

use crate::dtos::user::UserPayload;
use crate::services;

/// Lists users, optionally narrowed to a single id, with offset/limit
/// pagination. An empty page is reported as 404.
#[get("")]
pub async fn get_users(
    query: web::Query<UserFilter>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let users = services::user::list(&pool, &query.into_inner()).await?;
    Success::ok(users)
}

#[post("")]
pub async fn post_user(
    req: web::Json<UserPayload>,
    pool: web::Data<Arc<PgPool>>,
    mailer: web::Data<Mailer>,
) -> Res<impl Responder> {
    let user = services::user::register(&pool, &mailer, &req.into_inner()).await?;
    Success::created(user)
}

/// Full-row overwrite of an existing user; 404 before any mutation when the
/// id is unknown.
#[put("/{user_id}")]
pub async fn put_user(
    path: web::Path<i32>,
    req: web::Json<UserPayload>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    services::user::update(&pool, path.into_inner(), &req.into_inner()).await?;
    Success::ok(())
}

#[delete("/{user_id}")]
pub async fn delete_user(
    path: web::Path<i32>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    services::user::delete(&pool, path.into_inner()).await?;
    Success::ok(())
}

/// Returns the identity resolved from the bearer token by the
/// authorization middleware.
#[get("/self")]
pub async fn get_self(identity: web::ReqData<Identity>) -> Res<impl Responder> {
    Success::ok(identity.into_inner())
}
