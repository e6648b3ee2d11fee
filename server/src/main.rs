mod cors;

use actix_web::{App, HttpServer, web};
use common::env_config::Config;
use mailer::Mailer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    // best-effort registration mail sender
    let mail_sender = Mailer::new(config.smtp.clone());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .app_data(web::Data::new(mail_sender.clone()))
            .wrap(logger::middleware())
            .wrap(cors::middleware(&origin))
            .service(api_auth::mount_auth())
            .service(api_auth::mount_tokens())
            .service(
                web::scope("")
                    .wrap(api_auth::auth_middleware())
                    .service(api_auth::mount_users())
                    .service(api_fleet::mount_orders())
                    .service(api_fleet::mount_drivers())
                    .service(api_fleet::mount_dispatchers())
                    .service(api_fleet::mount_order_statuses()),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
