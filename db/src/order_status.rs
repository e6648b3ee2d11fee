use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, QueryBuilder};

use crate::classify;
use crate::dtos::order_status::{NewOrderStatus, OrderStatusFilter};
use crate::models::order_status::OrderStatus;

pub async fn list<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    filter: &OrderStatusFilter,
) -> Res<Vec<OrderStatus>> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM order_statuses");

    if let Some(order_status_id) = filter.order_status_id {
        qb.push(" WHERE id = ").push_bind(order_status_id);
    }

    qb.push(" ORDER BY id OFFSET ")
        .push_bind(filter.start)
        .push(" LIMIT ")
        .push_bind(filter.step);

    qb.build_query_as::<OrderStatus>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn exists_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_status_id: i32,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM order_statuses WHERE id = $1)")
        .bind(order_status_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: &NewOrderStatus,
) -> Res<OrderStatus> {
    sqlx::query_as::<_, OrderStatus>(
        r#"
        INSERT INTO order_statuses (id, status)
        VALUES (COALESCE($1, nextval(pg_get_serial_sequence('order_statuses', 'id'))::int), $2)
        RETURNING *
        "#,
    )
    .bind(data.id)
    .bind(&data.status)
    .fetch_one(executor)
    .await
    .map_err(|e| classify::write_error(e, &unique_messages(data.id), &[]))
}

pub async fn update<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_status_id: i32,
    data: &NewOrderStatus,
) -> Res<()> {
    sqlx::query("UPDATE order_statuses SET status = $1 WHERE id = $2")
        .bind(&data.status)
        .bind(order_status_id)
        .execute(executor)
        .await
        .map_err(AppError::from)?;
    Ok(())
}

pub async fn delete<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_status_id: i32,
) -> Res<()> {
    sqlx::query("DELETE FROM order_statuses WHERE id = $1")
        .bind(order_status_id)
        .execute(executor)
        .await
        .map_err(|e| {
            classify::write_error(
                e,
                &[],
                &[(
                    "orders_status_id_fkey",
                    format!(
                        "Order status with id {order_status_id} is still referenced by an order"
                    ),
                )],
            )
        })?;
    Ok(())
}

fn unique_messages(id: Option<i32>) -> Vec<classify::ConstraintMessage<'static>> {
    let details = match id {
        Some(id) => format!("Order status with id {id} already exists"),
        None => "Order status with this id already exists".to_string(),
    };
    vec![("order_statuses_pkey", details)]
}
