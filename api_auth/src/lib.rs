use actix_web::web;
use middleware::auth::AuthMiddleware;

pub mod routes {
    pub mod auth;
    pub mod token;
    pub mod user;
}
pub mod middleware {
    pub mod auth;
}

mod services {
    pub(crate) mod auth;
    pub(crate) mod user;
}
mod dtos {
    pub(crate) mod auth;
    pub(crate) mod user;
}

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_register)
        .service(routes::auth::post_login)
}

pub fn mount_tokens() -> actix_web::Scope {
    web::scope("/tokens").service(routes::token::post_create_token)
}

pub fn mount_users() -> actix_web::Scope {
    web::scope("/users")
        .service(routes::user::get_self)
        .service(routes::user::get_users)
        .service(routes::user::post_user)
        .service(routes::user::put_user)
        .service(routes::user::delete_user)
}

/// Bearer-token authorizer guarding protected scopes.
pub fn auth_middleware() -> AuthMiddleware {
    AuthMiddleware::new()
}
