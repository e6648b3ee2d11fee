use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, QueryBuilder};

use crate::classify;
use crate::dtos::user::{NewUser, UserFilter};
use crate::models::user::User;

pub async fn exists_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn exists_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: i32,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn list<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    filter: &UserFilter,
) -> Res<Vec<User>> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM users");

    if let Some(user_id) = filter.user_id {
        qb.push(" WHERE id = ").push_bind(user_id);
    }

    qb.push(" ORDER BY id OFFSET ")
        .push_bind(filter.start)
        .push(" LIMIT ")
        .push_bind(filter.step);

    qb.build_query_as::<User>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: &NewUser,
) -> Res<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, surname, email, hashed_password, phone_number, is_active, is_superuser, is_verified)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.surname)
    .bind(&data.email)
    .bind(&data.hashed_password)
    .bind(&data.phone_number)
    .bind(data.is_active)
    .bind(data.is_superuser)
    .bind(data.is_verified)
    .fetch_one(executor)
    .await
    .map_err(|e| classify::write_error(e, &unique_messages(&data.email), &[]))
}

pub async fn update<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: i32,
    data: &NewUser,
) -> Res<()> {
    sqlx::query(
        r#"
        UPDATE users
        SET name = $1, surname = $2, email = $3, hashed_password = $4, phone_number = $5,
            is_active = $6, is_superuser = $7, is_verified = $8
        WHERE id = $9
        "#,
    )
    .bind(&data.name)
    .bind(&data.surname)
    .bind(&data.email)
    .bind(&data.hashed_password)
    .bind(&data.phone_number)
    .bind(data.is_active)
    .bind(data.is_superuser)
    .bind(data.is_verified)
    .bind(user_id)
    .execute(executor)
    .await
    .map_err(|e| classify::write_error(e, &unique_messages(&data.email), &[]))?;
    Ok(())
}

pub async fn delete<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: i32,
) -> Res<()> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(executor)
        .await
        .map_err(|e| {
            classify::write_error(
                e,
                &[],
                &[(
                    "tokens_user_id_fkey",
                    format!("User with id {user_id} is still referenced by an access token"),
                )],
            )
        })?;
    Ok(())
}

fn unique_messages(email: &str) -> [classify::ConstraintMessage<'static>; 1] {
    [(
        "users_email_key",
        format!("User with email {email} already exists"),
    )]
}
