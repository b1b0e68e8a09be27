//! Helpers for integration tests.

use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use catalog_dashboard::auth::AUTH_COOKIE_NAME;
use catalog_dashboard::models::config::ServerConfig;
use catalog_dashboard::repository::{DEFAULT_CATALOG_SIZE, InMemoryCatalog};
use catalog_dashboard::routes;
use chrono::{TimeZone, Utc};
use tera::Tera;

pub fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        secret_key: String::new(),
        templates_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*").to_string(),
        assets_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/assets").to_string(),
        secure_cookies: false,
        catalog_size: DEFAULT_CATALOG_SIZE,
        catalog_anchor: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
        search_debounce_ms: 400,
    }
}

/// Application wired the same way as the binary, over the reference catalog.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    let config = server_config();
    let tera = Tera::new(&config.templates_dir).expect("templates should parse");
    let catalog = InMemoryCatalog::generate(config.catalog_size, config.catalog_anchor.unwrap())
        .expect("catalog should generate");
    let message_store = CookieMessageStore::builder(Key::generate()).build();

    App::new()
        .wrap(FlashMessagesFramework::builder(message_store).build())
        .app_data(web::Data::new(catalog))
        .app_data(web::Data::new(tera))
        .app_data(web::Data::new(config))
        .configure(routes::configure)
}

pub fn session_cookie() -> Cookie<'static> {
    Cookie::new(AUTH_COOKIE_NAME, "1")
}
