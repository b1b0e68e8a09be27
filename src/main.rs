use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use chrono::Utc;
use dotenvy::dotenv;
use tera::Tera;

use catalog_dashboard::models::config::ServerConfig;
use catalog_dashboard::repository::InMemoryCatalog;
use catalog_dashboard::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let secret_key = match Key::try_from(server_config.secret_key.as_bytes()) {
        Ok(key) => key,
        Err(e) => {
            log::error!("Invalid secret_key: {e}");
            std::process::exit(1);
        }
    };

    let tera = match Tera::new(&server_config.templates_dir) {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to parse templates: {e}");
            std::process::exit(1);
        }
    };

    let anchor = server_config.catalog_anchor.unwrap_or_else(Utc::now);
    let catalog = match InMemoryCatalog::generate(server_config.catalog_size, anchor) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to generate catalog: {e}");
            std::process::exit(1);
        }
    };

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = server_config.bind_address();
    let assets_dir = server_config.assets_dir.clone();
    log::info!("Serving catalog dashboard on http://{}:{}", bind_address.0, bind_address.1);

    let catalog = web::Data::new(catalog);
    let tera = web::Data::new(tera);
    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(Logger::default())
            .service(Files::new("/assets", assets_dir.clone()))
            .app_data(catalog.clone())
            .app_data(tera.clone())
            .app_data(server_config.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
