use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, QueryBuilder};

use crate::classify::{self, missing_reference};
use crate::dtos::driver::{DriverFilter, NewDriver};
use crate::models::driver::Driver;

pub async fn list<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    filter: &DriverFilter,
) -> Res<Vec<Driver>> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM drivers");
    let mut conditions_added = false;

    let mut add_condition_separator = |qb: &mut QueryBuilder<Postgres>| {
        if !conditions_added {
            qb.push(" WHERE ");
            conditions_added = true;
        } else {
            qb.push(" AND ");
        }
    };

    if let Some(driver_id) = filter.driver_id {
        add_condition_separator(&mut qb);
        qb.push("id = ").push_bind(driver_id);
    }

    if let Some(dispatcher_id) = filter.dispatcher_id {
        add_condition_separator(&mut qb);
        qb.push("dispatcher_id = ").push_bind(dispatcher_id);
    }

    qb.push(" ORDER BY id OFFSET ")
        .push_bind(filter.start)
        .push(" LIMIT ")
        .push_bind(filter.step);

    qb.build_query_as::<Driver>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn exists_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    driver_id: i32,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM drivers WHERE id = $1)")
        .bind(driver_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: &NewDriver,
) -> Res<Driver> {
    sqlx::query_as::<_, Driver>(
        r#"
        INSERT INTO drivers (id, name, surname, email, password, phone_number, dispatcher_id)
        VALUES (COALESCE($1, nextval(pg_get_serial_sequence('drivers', 'id'))::int), $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(data.id)
    .bind(&data.name)
    .bind(&data.surname)
    .bind(&data.email)
    .bind(&data.password)
    .bind(&data.phone_number)
    .bind(data.dispatcher_id)
    .fetch_one(executor)
    .await
    .map_err(|e| classify::write_error(e, &unique_messages(data.id), &foreign_key_messages(data)))
}

pub async fn update<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    driver_id: i32,
    data: &NewDriver,
) -> Res<()> {
    sqlx::query(
        r#"
        UPDATE drivers
        SET name = $1, surname = $2, email = $3, password = $4, phone_number = $5, dispatcher_id = $6
        WHERE id = $7
        "#,
    )
    .bind(&data.name)
    .bind(&data.surname)
    .bind(&data.email)
    .bind(&data.password)
    .bind(&data.phone_number)
    .bind(data.dispatcher_id)
    .bind(driver_id)
    .execute(executor)
    .await
    .map_err(|e| classify::write_error(e, &[], &foreign_key_messages(data)))?;
    Ok(())
}

pub async fn delete<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    driver_id: i32,
) -> Res<()> {
    sqlx::query("DELETE FROM drivers WHERE id = $1")
        .bind(driver_id)
        .execute(executor)
        .await
        .map_err(|e| {
            classify::write_error(
                e,
                &[],
                &[(
                    "orders_driver_id_fkey",
                    format!("Driver with id {driver_id} is still referenced by an order"),
                )],
            )
        })?;
    Ok(())
}

fn unique_messages(id: Option<i32>) -> Vec<classify::ConstraintMessage<'static>> {
    let details = match id {
        Some(id) => format!("Driver with id {id} already exists"),
        None => "Driver with this id already exists".to_string(),
    };
    vec![("drivers_pkey", details)]
}

fn foreign_key_messages(data: &NewDriver) -> Vec<classify::ConstraintMessage<'static>> {
    vec![(
        "drivers_dispatcher_id_fkey",
        missing_reference("Dispatcher", data.dispatcher_id),
    )]
}
