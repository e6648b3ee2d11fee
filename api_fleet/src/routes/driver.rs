use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::validate;
use db::dtos::driver::DriverFilter;
use sqlx::PgPool;

use crate::dtos::driver::DriverPayload;

/// Lists drivers, filterable by driver id and by the dispatcher they are
/// assigned to.
#[get("")]
pub async fn get_drivers(
    query: web::Query<DriverFilter>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let filter = query.into_inner();
    validate::page_bounds(filter.start, filter.step)?;

    let drivers = db::driver::list(pg_pool, &filter).await?;
    if drivers.is_empty() {
        return Err(AppError::NotFound(
            "No drivers matched the given criteria".to_string(),
        ));
    }
    Success::ok(drivers)
}

#[post("")]
pub async fn post_driver(
    req: web::Json<DriverPayload>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let payload = req.into_inner();
    payload.validate()?;

    let driver = db::driver::insert(pg_pool, &payload.to_new_driver()).await?;
    Success::created(driver)
}

#[put("/{driver_id}")]
pub async fn put_driver(
    path: web::Path<i32>,
    req: web::Json<DriverPayload>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let driver_id = path.into_inner();
    let payload = req.into_inner();
    payload.validate()?;

    if !db::driver::exists_by_id(pg_pool, driver_id).await? {
        return Err(AppError::NotFound(format!(
            "Driver with id {driver_id} does not exist"
        )));
    }

    db::driver::update(pg_pool, driver_id, &payload.to_new_driver()).await?;
    Success::ok(())
}

#[delete("/{driver_id}")]
pub async fn delete_driver(
    path: web::Path<i32>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let driver_id = path.into_inner();

    if !db::driver::exists_by_id(pg_pool, driver_id).await? {
        return Err(AppError::NotFound(format!(
            "Driver with id {driver_id} does not exist"
        )));
    }

    db::driver::delete(pg_pool, driver_id).await?;
    Success::ok(())
}
