use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::query::CatalogQuery;
use crate::dto::catalog::CatalogViewDto;
use crate::dto::dashboard::quick_actions;
use crate::forms::catalog::CATALOG_API_PATH;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryCatalog;
use crate::routes::{base_context, render_template};
use crate::services::catalog::list_catalog;
use crate::services::dashboard::dashboard_stats;

#[get("")]
pub async fn show_dashboard(
    flash_messages: IncomingFlashMessages,
    catalog: web::Data<InMemoryCatalog>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match dashboard_stats(catalog.get_ref()) {
        Ok(stats) => {
            let mut context = base_context(&flash_messages, true, "dashboard");
            context.insert("stats", &stats);
            context.insert("quick_actions", &quick_actions());
            render_template(&tera, "dashboard/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/catalog")]
pub async fn show_catalog(
    req: HttpRequest,
    flash_messages: IncomingFlashMessages,
    catalog: web::Data<InMemoryCatalog>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = CatalogQuery::from_query_string(req.query_string());
    match list_catalog(&query, catalog.get_ref()) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, true, "catalog");
            context.insert("view", &CatalogViewDto::new(&query, &page));
            context.insert("api_path", CATALOG_API_PATH);
            context.insert("debounce_ms", &server_config.search_debounce_ms);
            render_template(&tera, "dashboard/catalog.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render catalog page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
