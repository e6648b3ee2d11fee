use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, QueryBuilder};

use crate::classify;
use crate::dtos::dispatcher::{DispatcherFilter, NewDispatcher};
use crate::models::dispatcher::Dispatcher;

pub async fn list<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    filter: &DispatcherFilter,
) -> Res<Vec<Dispatcher>> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM dispatchers");

    if let Some(dispatcher_id) = filter.dispatcher_id {
        qb.push(" WHERE id = ").push_bind(dispatcher_id);
    }

    qb.push(" ORDER BY id OFFSET ")
        .push_bind(filter.start)
        .push(" LIMIT ")
        .push_bind(filter.step);

    qb.build_query_as::<Dispatcher>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn exists_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    dispatcher_id: i32,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM dispatchers WHERE id = $1)")
        .bind(dispatcher_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: &NewDispatcher,
) -> Res<Dispatcher> {
    sqlx::query_as::<_, Dispatcher>(
        r#"
        INSERT INTO dispatchers (id, name, surname, email, password, phone_number)
        VALUES (COALESCE($1, nextval(pg_get_serial_sequence('dispatchers', 'id'))::int), $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(data.id)
    .bind(&data.name)
    .bind(&data.surname)
    .bind(&data.email)
    .bind(&data.password)
    .bind(&data.phone_number)
    .fetch_one(executor)
    .await
    .map_err(|e| classify::write_error(e, &unique_messages(data.id), &[]))
}

pub async fn update<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    dispatcher_id: i32,
    data: &NewDispatcher,
) -> Res<()> {
    sqlx::query(
        r#"
        UPDATE dispatchers
        SET name = $1, surname = $2, email = $3, password = $4, phone_number = $5
        WHERE id = $6
        "#,
    )
    .bind(&data.name)
    .bind(&data.surname)
    .bind(&data.email)
    .bind(&data.password)
    .bind(&data.phone_number)
    .bind(dispatcher_id)
    .execute(executor)
    .await
    .map_err(AppError::from)?;
    Ok(())
}

pub async fn delete<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    dispatcher_id: i32,
) -> Res<()> {
    sqlx::query("DELETE FROM dispatchers WHERE id = $1")
        .bind(dispatcher_id)
        .execute(executor)
        .await
        .map_err(|e| {
            classify::write_error(
                e,
                &[],
                &[
                    (
                        "drivers_dispatcher_id_fkey",
                        format!("Dispatcher with id {dispatcher_id} is still referenced by a driver"),
                    ),
                    (
                        "orders_dispatcher_id_fkey",
                        format!("Dispatcher with id {dispatcher_id} is still referenced by an order"),
                    ),
                ],
            )
        })?;
    Ok(())
}

fn unique_messages(id: Option<i32>) -> Vec<classify::ConstraintMessage<'static>> {
    let details = match id {
        Some(id) => format!("Dispatcher with id {id} already exists"),
        None => "Dispatcher with this id already exists".to_string(),
    };
    vec![("dispatchers_pkey", details)]
}
