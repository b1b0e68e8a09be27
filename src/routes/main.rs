use actix_web::{HttpRequest, HttpResponse, Responder, get, http::header, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::{is_authenticated, login_cookie, logout_cookie};
use crate::forms::auth::{LoginForm, resolve_next};
use crate::forms::catalog::QueryValues;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};

#[get("/")]
pub async fn index(
    req: HttpRequest,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, is_authenticated(&req), "index");
    render_template(&tera, "main/index.html", &context)
}

#[get("/login")]
pub async fn show_login(
    req: HttpRequest,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = QueryValues::parse(req.query_string());
    let next = resolve_next(params.first("next"));
    if is_authenticated(&req) {
        return redirect(&next);
    }

    let mut context = base_context(&flash_messages, false, "login");
    context.insert("next", &next);
    render_template(&tera, "main/login.html", &context)
}

#[post("/login")]
pub async fn login(
    web::Form(form): web::Form<LoginForm>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let next = resolve_next(form.next.as_deref());
    log::info!("Mock sign-in for '{}', continuing to {next}", form.email);
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, next))
        .cookie(login_cookie(server_config.secure_cookies))
        .finish()
}

#[post("/logout")]
pub async fn logout() -> impl Responder {
    FlashMessage::info("You have been signed out.").send();
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(logout_cookie())
        .finish()
}
