use actix_web::middleware::from_fn;
use actix_web::{HttpResponse, http::header, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::auth::require_session;

pub mod api;
pub mod dashboard;
pub mod main;

/// Bootstrap alert class for a flash message level.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info => "info",
        Level::Debug => "secondary",
    }
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(tera.render(template, context).unwrap_or_else(|e| {
            log::error!("Failed to render template '{template}': {e}");
            String::new()
        }))
}

pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    signed_in: bool,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("signed_in", &signed_in);
    context.insert("current_page", current_page);
    context
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Register every page and API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::index)
        .service(main::show_login)
        .service(main::login)
        .service(main::logout)
        .service(
            web::scope("/api")
                .service(api::api_catalog)
                .service(api::api_login)
                .service(api::api_logout),
        )
        .service(
            web::scope("/dashboard")
                .wrap(from_fn(require_session))
                .service(dashboard::show_dashboard)
                .service(dashboard::show_catalog),
        );
}
