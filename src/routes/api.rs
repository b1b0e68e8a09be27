use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::auth::{login_cookie, logout_cookie};
use crate::forms::catalog::QueryValues;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryCatalog;
use crate::services::ServiceError;
use crate::services::catalog::api_catalog as api_catalog_service;

#[get("/catalog")]
pub async fn api_catalog(
    req: HttpRequest,
    catalog: web::Data<InMemoryCatalog>,
) -> impl Responder {
    let values = QueryValues::parse(req.query_string());
    match api_catalog_service(&values, catalog.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(ServiceError::Simulated) => {
            HttpResponse::InternalServerError().json(json!({ "error": "Simulated API error" }))
        }
        Err(err) => {
            log::error!("Failed to fetch catalog: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to fetch catalog" }))
        }
    }
}

#[post("/auth/login")]
pub async fn api_login(server_config: web::Data<ServerConfig>) -> impl Responder {
    HttpResponse::Ok()
        .cookie(login_cookie(server_config.secure_cookies))
        .json(json!({ "success": true }))
}

#[post("/auth/logout")]
pub async fn api_logout() -> impl Responder {
    HttpResponse::Ok()
        .cookie(logout_cookie())
        .json(json!({ "success": true }))
}
