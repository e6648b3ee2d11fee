use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::validate;
use db::dtos::dispatcher::DispatcherFilter;
use sqlx::PgPool;

use crate::dtos::dispatcher::DispatcherPayload;

#[get("")]
pub async fn get_dispatchers(
    query: web::Query<DispatcherFilter>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let filter = query.into_inner();
    validate::page_bounds(filter.start, filter.step)?;

    let dispatchers = db::dispatcher::list(pg_pool, &filter).await?;
    if dispatchers.is_empty() {
        return Err(AppError::NotFound(
            "No dispatchers matched the given criteria".to_string(),
        ));
    }
    Success::ok(dispatchers)
}

#[post("")]
pub async fn post_dispatcher(
    req: web::Json<DispatcherPayload>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let payload = req.into_inner();
    payload.validate()?;

    let dispatcher = db::dispatcher::insert(pg_pool, &payload.to_new_dispatcher()).await?;
    Success::created(dispatcher)
}

#[put("/{dispatcher_id}")]
pub async fn put_dispatcher(
    path: web::Path<i32>,
    req: web::Json<DispatcherPayload>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let dispatcher_id = path.into_inner();
    let payload = req.into_inner();
    payload.validate()?;

    if !db::dispatcher::exists_by_id(pg_pool, dispatcher_id).await? {
        return Err(AppError::NotFound(format!(
            "Dispatcher with id {dispatcher_id} does not exist"
        )));
    }

    db::dispatcher::update(pg_pool, dispatcher_id, &payload.to_new_dispatcher()).await?;
    Success::ok(())
}

/// Removing a dispatcher that drivers or orders still reference is refused;
/// references are non-owning and never cascade.
#[delete("/{dispatcher_id}")]
pub async fn delete_dispatcher(
    path: web::Path<i32>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let dispatcher_id = path.into_inner();

    if !db::dispatcher::exists_by_id(pg_pool, dispatcher_id).await? {
        return Err(AppError::NotFound(format!(
            "Dispatcher with id {dispatcher_id} does not exist"
        )));
    }

    db::dispatcher::delete(pg_pool, dispatcher_id).await?;
    Success::ok(())
}
