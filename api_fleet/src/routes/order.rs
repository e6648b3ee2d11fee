use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::validate;
use db::dtos::order::OrderFilter;
use sqlx::PgPool;

use crate::dtos::order::OrderPayload;

/// Lists orders matching the given criteria.
///
/// # Input
/// - `start`: zero-based offset into the result set (default 0)
/// - `step`: page size (default 10, must be positive)
/// - `order_id`, `user_id`, `status_id`: optional exact-match filters,
///   combined with AND; an omitted filter places no constraint
///
/// # Output
/// - Success: the matching page of orders, in id order
/// - Error: 404 when the page is empty
#[get("")]
pub async fn get_orders(
    query: web::Query<OrderFilter>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let filter = query.into_inner();
    validate::page_bounds(filter.start, filter.step)?;

    let orders = db::order::list(pg_pool, &filter).await?;
    if orders.is_empty() {
        return Err(AppError::NotFound(
            "No orders matched the given criteria".to_string(),
        ));
    }
    Success::ok(orders)
}

/// Creates a new order. A dangling status/user/dispatcher/driver reference
/// is rejected with an error naming the missing entity; an explicit id that
/// collides with an existing order is a duplicate-key error.
#[post("")]
pub async fn post_order(
    req: web::Json<OrderPayload>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let payload = req.into_inner();
    payload.validate()?;

    let order = db::order::insert(pg_pool, &payload.to_new_order()).await?;
    Success::created(order)
}

/// Overwrites an existing order with the validated payload. The existence
/// pre-check keeps an unknown id from becoming a silent no-op update.
#[put("/{order_id}")]
pub async fn put_order(
    path: web::Path<i32>,
    req: web::Json<OrderPayload>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let order_id = path.into_inner();
    let payload = req.into_inner();
    payload.validate()?;

    if !db::order::exists_by_id(pg_pool, order_id).await? {
        return Err(AppError::NotFound(format!(
            "Order with id {order_id} does not exist"
        )));
    }

    db::order::update(pg_pool, order_id, &payload.to_new_order()).await?;
    Success::ok(())
}

#[delete("/{order_id}")]
pub async fn delete_order(
    path: web::Path<i32>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let order_id = path.into_inner();

    if !db::order::exists_by_id(pg_pool, order_id).await? {
        return Err(AppError::NotFound(format!(
            "Order with id {order_id} does not exist"
        )));
    }

    db::order::delete(pg_pool, order_id).await?;
    Success::ok(())
}
