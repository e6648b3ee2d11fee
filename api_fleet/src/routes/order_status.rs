use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::validate;
use db::dtos::order_status::OrderStatusFilter;
use sqlx::PgPool;

use crate::dtos::order_status::OrderStatusPayload;

#[get("")]
pub async fn get_order_statuses(
    query: web::Query<OrderStatusFilter>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let filter = query.into_inner();
    validate::page_bounds(filter.start, filter.step)?;

    let statuses = db::order_status::list(pg_pool, &filter).await?;
    if statuses.is_empty() {
        return Err(AppError::NotFound(
            "No order statuses matched the given criteria".to_string(),
        ));
    }
    Success::ok(statuses)
}

#[post("")]
pub async fn post_order_status(
    req: web::Json<OrderStatusPayload>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let payload = req.into_inner();

    let status = db::order_status::insert(pg_pool, &payload.to_new_order_status()).await?;
    Success::created(status)
}

#[put("/{order_status_id}")]
pub async fn put_order_status(
    path: web::Path<i32>,
    req: web::Json<OrderStatusPayload>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let order_status_id = path.into_inner();
    let payload = req.into_inner();

    if !db::order_status::exists_by_id(pg_pool, order_status_id).await? {
        return Err(AppError::NotFound(format!(
            "Order status with id {order_status_id} does not exist"
        )));
    }

    db::order_status::update(pg_pool, order_status_id, &payload.to_new_order_status()).await?;
    Success::ok(())
}

#[delete("/{order_status_id}")]
pub async fn delete_order_status(
    path: web::Path<i32>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let order_status_id = path.into_inner();

    if !db::order_status::exists_by_id(pg_pool, order_status_id).await? {
        return Err(AppError::NotFound(format!(
            "Order status with id {order_status_id} does not exist"
        )));
    }

    db::order_status::delete(pg_pool, order_status_id).await?;
    Success::ok(())
}
