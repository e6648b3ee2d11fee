use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::classify;
use crate::models::token::AccessToken;
use crate::models::user::Identity;

/// Issues `access_token` for `user_id`, replacing any previous token value
/// in place. The single atomic statement closes the race two concurrent
/// logins would otherwise have between the existence check and the write.
pub async fn upsert<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: i32,
    access_token: &str,
) -> Res<AccessToken> {
    sqlx::query_as::<_, AccessToken>(
        r#"
        INSERT INTO tokens (user_id, access_token)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET access_token = EXCLUDED.access_token
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(access_token)
    .fetch_one(executor)
    .await
    .map_err(|e| {
        classify::write_error(
            e,
            &[],
            &[(
                "tokens_user_id_fkey",
                classify::missing_reference("User", Some(user_id)),
            )],
        )
    })
}

/// Resolves a bearer token to the identity of its owner. A superseded or
/// never-issued token yields `None`.
pub async fn find_identity<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    access_token: &str,
) -> Res<Option<Identity>> {
    sqlx::query_as::<_, Identity>(
        r#"
        SELECT u.id, u.email, u.name, u.surname, u.phone_number
        FROM tokens t
        JOIN users u ON u.id = t.user_id
        WHERE t.access_token = $1
        "#,
    )
    .bind(access_token)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}
