use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use actix_web::test;

mod common;

fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[actix_web::test]
async fn anonymous_dashboard_visit_redirects_to_login() {
    let app = test::init_service(common::test_app()).await;

    let req = test::TestRequest::get()
        .uri("/dashboard/catalog?status=draft")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login?next=%2Fdashboard%2Fcatalog");
}

#[actix_web::test]
async fn wrong_cookie_value_is_not_a_session() {
    let app = test::init_service(common::test_app()).await;

    let req = test::TestRequest::get()
        .uri("/dashboard")
        .cookie(Cookie::new("mock_auth", "0"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login?next=%2Fdashboard");
}

#[actix_web::test]
async fn login_sets_cookie_and_follows_next() {
    let app = test::init_service(common::test_app()).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([
            ("email", "demo@example.com"),
            ("password", "anything"),
            ("next", "/dashboard/catalog"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard/catalog");
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "mock_auth")
        .expect("session cookie");
    assert_eq!(cookie.value(), "1");
    assert_eq!(cookie.http_only(), Some(true));
}

#[actix_web::test]
async fn login_ignores_foreign_next() {
    let app = test::init_service(common::test_app()).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", ""), ("next", "https://example.org/")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(location(&resp), "/dashboard");
}

#[actix_web::test]
async fn signed_in_visitor_skips_login_page() {
    let app = test::init_service(common::test_app()).await;

    let req = test::TestRequest::get()
        .uri("/login?next=%2Fdashboard%2Fcatalog")
        .cookie(common::session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard/catalog");
}

#[actix_web::test]
async fn login_page_renders_for_anonymous_visitor() {
    let app = test::init_service(common::test_app()).await;

    let req = test::TestRequest::get()
        .uri("/login?next=%2Fdashboard%2Fcatalog")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();

    assert!(body.contains("Any credentials will work."));
    assert!(body.contains(r#"name="next" value="&#x2F;dashboard&#x2F;catalog""#));
}

#[actix_web::test]
async fn logout_clears_cookie() {
    let app = test::init_service(common::test_app()).await;

    let req = test::TestRequest::post()
        .uri("/logout")
        .cookie(common::session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "mock_auth")
        .expect("removal cookie");
    assert_eq!(cookie.value(), "");
}

#[actix_web::test]
async fn api_login_and_logout_report_success() {
    let app = test::init_service(common::test_app()).await;

    for uri in ["/api/auth/login", "/api/auth/logout"] {
        let req = test::TestRequest::post().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.response().cookies().any(|c| c.name() == "mock_auth"));

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "success": true }));
    }
}

#[actix_web::test]
async fn protected_path_succeeds_after_login() {
    let app = test::init_service(common::test_app()).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "demo@example.com"), ("next", "/dashboard/catalog")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let session = resp
        .response()
        .cookies()
        .find(|c| c.name() == "mock_auth")
        .map(|c| Cookie::new(c.name().to_string(), c.value().to_string()))
        .expect("session cookie");

    let req = test::TestRequest::get()
        .uri("/dashboard/catalog")
        .cookie(session)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn login_page_takes_first_of_repeated_next() {
    let app = test::init_service(common::test_app()).await;

    let req = test::TestRequest::get()
        .uri("/login?next=%2Fdashboard%2Fcatalog&next=%2Fdashboard")
        .cookie(common::session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard/catalog");

    let req = test::TestRequest::get()
        .uri("/login?next=%2Fdashboard%2Fcatalog&next=%2Fdashboard")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
