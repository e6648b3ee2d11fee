use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, QueryBuilder};

use crate::classify::{self, missing_reference};
use crate::dtos::order::{NewOrder, OrderFilter};
use crate::models::order::Order;

pub async fn list<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    filter: &OrderFilter,
) -> Res<Vec<Order>> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM orders");
    let mut conditions_added = false;

    // Helper to add WHERE or AND
    let mut add_condition_separator = |qb: &mut QueryBuilder<Postgres>| {
        if !conditions_added {
            qb.push(" WHERE ");
            conditions_added = true;
        } else {
            qb.push(" AND ");
        }
    };

    if let Some(order_id) = filter.order_id {
        add_condition_separator(&mut qb);
        qb.push("id = ").push_bind(order_id);
    }

    if let Some(user_id) = filter.user_id {
        add_condition_separator(&mut qb);
        qb.push("user_id = ").push_bind(user_id);
    }

    if let Some(status_id) = filter.status_id {
        add_condition_separator(&mut qb);
        qb.push("status_id = ").push_bind(status_id);
    }

    qb.push(" ORDER BY id OFFSET ")
        .push_bind(filter.start)
        .push(" LIMIT ")
        .push_bind(filter.step);

    qb.build_query_as::<Order>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn exists_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_id: i32,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM orders WHERE id = $1)")
        .bind(order_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: &NewOrder,
) -> Res<Order> {
    // An absent id falls through to the sequence so that clients may still
    // pick explicit identifiers (and collide on them).
    sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (id, status_id, start_address, end_address, cost, user_id, dispatcher_id, driver_id)
        VALUES (COALESCE($1, nextval(pg_get_serial_sequence('orders', 'id'))::int), $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(data.id)
    .bind(data.status_id)
    .bind(&data.start_address)
    .bind(&data.end_address)
    .bind(data.cost)
    .bind(data.user_id)
    .bind(data.dispatcher_id)
    .bind(data.driver_id)
    .fetch_one(executor)
    .await
    .map_err(|e| classify::write_error(e, &unique_messages(data.id), &foreign_key_messages(data)))
}

pub async fn update<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_id: i32,
    data: &NewOrder,
) -> Res<()> {
    sqlx::query(
        r#"
        UPDATE orders
        SET status_id = $1, start_address = $2, end_address = $3, cost = $4,
            user_id = $5, dispatcher_id = $6, driver_id = $7
        WHERE id = $8
        "#,
    )
    .bind(data.status_id)
    .bind(&data.start_address)
    .bind(&data.end_address)
    .bind(data.cost)
    .bind(data.user_id)
    .bind(data.dispatcher_id)
    .bind(data.driver_id)
    .bind(order_id)
    .execute(executor)
    .await
    .map_err(|e| classify::write_error(e, &[], &foreign_key_messages(data)))?;
    Ok(())
}

pub async fn delete<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_id: i32,
) -> Res<()> {
    sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(order_id)
        .execute(executor)
        .await
        .map_err(AppError::from)?;
    Ok(())
}

fn unique_messages(id: Option<i32>) -> Vec<classify::ConstraintMessage<'static>> {
    let details = match id {
        Some(id) => format!("Order with id {id} already exists"),
        None => "Order with this id already exists".to_string(),
    };
    vec![("orders_pkey", details)]
}

fn foreign_key_messages(data: &NewOrder) -> Vec<classify::ConstraintMessage<'static>> {
    vec![
        (
            "orders_status_id_fkey",
            missing_reference("Order status", Some(data.status_id)),
        ),
        (
            "orders_user_id_fkey",
            missing_reference("User", Some(data.user_id)),
        ),
        (
            "orders_dispatcher_id_fkey",
            missing_reference("Dispatcher", data.dispatcher_id),
        ),
        (
            "orders_driver_id_fkey",
            missing_reference("Driver", data.driver_id),
        ),
    ]
}
