use common::error::{AppError, Res};
use common::validate;
use db::dtos::user::{NewUser, UserFilter};
use db::models::user::User;
use mailer::Mailer;
use sqlx::PgPool;

use crate::dtos::user::UserPayload;
use crate::services::auth;

fn to_new_user(payload: &UserPayload) -> Res<NewUser> {
    Ok(NewUser {
        name: payload.name.clone(),
        surname: payload.surname.clone(),
        email: payload.email.clone(),
        hashed_password: auth::hash_password(&payload.password)?,
        phone_number: payload.phone_number.clone(),
        is_active: payload.is_active,
        is_superuser: payload.is_superuser,
        is_verified: payload.is_verified,
    })
}

/// Registers a new user: duplicate-email pre-check, argon2 hash, insert.
///
/// The registration notification is spawned fire-and-forget; its outcome is
/// logged by the mailer and never fails the registration.
pub async fn register(pool: &PgPool, mailer: &Mailer, payload: &UserPayload) -> Res<User> {
    payload.validate()?;

    if db::user::exists_by_email(pool, &payload.email).await? {
        return Err(AppError::DuplicateKey(format!(
            "User with email {} already exists",
            payload.email
        )));
    }

    let user = db::user::insert(pool, &to_new_user(payload)?).await?;

    let mailer = mailer.clone();
    let recipient = user.email.clone();
    actix_web::rt::spawn(async move {
        mailer.send_registration_email(&recipient).await;
    });

    Ok(user)
}

pub async fn list(pool: &PgPool, filter: &UserFilter) -> Res<Vec<User>> {
    validate::page_bounds(filter.start, filter.step)?;
    let users = db::user::list(pool, filter).await?;
    if users.is_empty() {
        return Err(AppError::NotFound(
            "No users matched the given criteria".to_string(),
        ));
    }
    Ok(users)
}

pub async fn update(pool: &PgPool, user_id: i32, payload: &UserPayload) -> Res<()> {
    payload.validate()?;

    if !db::user::exists_by_id(pool, user_id).await? {
        return Err(AppError::NotFound(format!(
            "User with id {user_id} does not exist"
        )));
    }

    db::user::update(pool, user_id, &to_new_user(payload)?).await
}

pub async fn delete(pool: &PgPool, user_id: i32) -> Res<()> {
    if !db::user::exists_by_id(pool, user_id).await? {
        return Err(AppError::NotFound(format!(
            "User with id {user_id} does not exist"
        )));
    }

    db::user::delete(pool, user_id).await
}
