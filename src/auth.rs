//! Mock session handling.
//!
//! A visitor is "signed in" when the `mock_auth` cookie carries the value `1`.
//! Nothing is verified; the gate only demonstrates protected routing.

use actix_web::body::{BoxBody, MessageBody};
use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{Error, HttpRequest, HttpResponse, http::header};

pub const AUTH_COOKIE_NAME: &str = "mock_auth";
pub const AUTH_COOKIE_VALUE: &str = "1";
pub const LOGIN_PATH: &str = "/login";

const SESSION_LIFETIME_DAYS: i64 = 7;

pub fn is_authenticated(req: &HttpRequest) -> bool {
    req.cookie(AUTH_COOKIE_NAME)
        .is_some_and(|cookie| cookie.value() == AUTH_COOKIE_VALUE)
}

/// Session cookie issued on sign-in. `secure` should be set in production.
pub fn login_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE_NAME, AUTH_COOKIE_VALUE)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_LIFETIME_DAYS))
        .finish()
}

/// Cookie that makes the browser drop the session.
pub fn logout_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(AUTH_COOKIE_NAME, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// `/login?next=<path>` for a visitor bounced from `path`.
pub fn login_redirect_target(path: &str) -> String {
    match serde_urlencoded::to_string([("next", path)]) {
        Ok(query) => format!("{LOGIN_PATH}?{query}"),
        Err(e) => {
            log::error!("Failed to encode login redirect for '{path}': {e}");
            LOGIN_PATH.to_string()
        }
    }
}

/// Middleware guarding the dashboard scope.
///
/// Anonymous requests are answered with `303 See Other` to the login page,
/// carrying the requested path in `next`.
pub async fn require_session(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    if is_authenticated(req.request()) {
        return next.call(req).await.map(ServiceResponse::map_into_boxed_body);
    }

    let location = login_redirect_target(req.path());
    log::debug!("Redirecting anonymous request for {} to {location}", req.path());
    let response = HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish();
    Ok(req.into_response(response))
}
