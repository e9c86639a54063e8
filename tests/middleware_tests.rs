//! Middleware tests
//!
//! ShortLinkGateway and RequestIdMiddleware wired into a real actix App.

use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::test::{self, TestRequest};
use actix_web::{App, HttpRequest, HttpResponse, web};

use linkgate::api::{
    self,
    middleware::{RequestId, RequestIdMiddleware, ShortLinkGateway},
    services::AppStartTime,
};
use linkgate::gateway::{GatewayHandle, RedirectGateway, ReservedPrefixes};

// =============================================================================
// Test Setup
// =============================================================================

fn handle(base: &str) -> GatewayHandle {
    GatewayHandle::new(RedirectGateway::new(
        base,
        ReservedPrefixes::default().with("/health"),
    ))
}

async fn dashboard_handler() -> HttpResponse {
    HttpResponse::Ok().body("dashboard")
}

async fn request_id_handler(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().body(RequestId::of(&req).unwrap_or_default())
}

macro_rules! gateway_app {
    ($handle:expr) => {
        test::init_service(
            App::new()
                .wrap(ShortLinkGateway::new($handle.clone()))
                .wrap(RequestIdMiddleware)
                .route("/dashboard/transactions", web::get().to(dashboard_handler))
                .route("/dashboard/request-id", web::get().to(request_id_handler))
                .configure(api::configure(
                    "/health",
                    $handle.clone(),
                    AppStartTime::now(),
                )),
        )
        .await
    };
}

// =============================================================================
// Redirect behaviour
// =============================================================================

#[actix_rt::test]
async fn test_short_code_redirects_with_302() {
    let gw = handle("https://api.x.com/");
    let app = gateway_app!(gw);

    let req = TestRequest::get().uri("/myCode123").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some("https://api.x.com/r/myCode123")
    );
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_rt::test]
async fn test_encoded_space_is_re_encoded() {
    let gw = handle("https://api.x.com");
    let app = gateway_app!(gw);

    let req = TestRequest::get().uri("/ab%20c").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some("https://api.x.com/r/ab%20c")
    );
}

#[actix_rt::test]
async fn test_query_string_not_forwarded() {
    let gw = handle("https://api.x.com");
    let app = gateway_app!(gw);

    let req = TestRequest::get().uri("/abc?utm_source=x").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some("https://api.x.com/r/abc")
    );
}

#[actix_rt::test]
async fn test_head_request_redirects() {
    let gw = handle("https://api.x.com");
    let app = gateway_app!(gw);

    let req = TestRequest::default()
        .method(actix_web::http::Method::HEAD)
        .uri("/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
}

// =============================================================================
// Pass-through behaviour
// =============================================================================

#[actix_rt::test]
async fn test_application_route_reaches_handler() {
    let gw = handle("https://api.x.com");
    let app = gateway_app!(gw);

    let req = TestRequest::get()
        .uri("/dashboard/transactions")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "dashboard");
}

#[actix_rt::test]
async fn test_static_file_and_root_fall_through_to_not_found() {
    let gw = handle("https://api.x.com");
    let app = gateway_app!(gw);

    for uri in ["/robots.txt", "/"] {
        let req = TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        assert!(resp.headers().get(LOCATION).is_none());
    }
}

#[actix_rt::test]
async fn test_unconfigured_backend_passes_short_codes() {
    let gw = handle("");
    let app = gateway_app!(gw);

    let req = TestRequest::get().uri("/myCode123").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_health_routes_are_not_short_codes() {
    let gw = handle("https://api.x.com");
    let app = gateway_app!(gw);

    let req = TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["redirect_enabled"], true);
    assert!(
        body["reserved_prefixes"]
            .as_array()
            .expect("array")
            .iter()
            .any(|p| p == "/health")
    );
}

// =============================================================================
// Reload and request id
// =============================================================================

#[actix_rt::test]
async fn test_swapped_gateway_applies_to_next_request() {
    let gw = handle("");
    let app = gateway_app!(gw);

    let req = TestRequest::get().uri("/abc").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    gw.store(RedirectGateway::new(
        "https://api.x.com",
        ReservedPrefixes::default(),
    ));

    let req = TestRequest::get().uri("/abc").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FOUND
    );
}

#[actix_rt::test]
async fn test_request_id_header_added() {
    let gw = handle("https://api.x.com");
    let app = gateway_app!(gw);

    let req = TestRequest::get().uri("/abc").to_request();
    let resp = test::call_service(&app, req).await;
    let id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("request id header");
    assert_eq!(id.len(), 36);
}

#[actix_rt::test]
async fn test_request_id_inherited_from_upstream() {
    let gw = handle("https://api.x.com");
    let app = gateway_app!(gw);

    let req = TestRequest::get()
        .uri("/dashboard/transactions")
        .insert_header(("x-request-id", "edge-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("edge-42")
    );
}

#[actix_rt::test]
async fn test_request_id_extension_matches_response_header() {
    let gw = handle("https://api.x.com");
    let app = gateway_app!(gw);

    let req = TestRequest::get().uri("/dashboard/request-id").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let header = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .expect("request id header");
    let body = test::read_body(resp).await;
    assert_eq!(body, header.as_bytes());
}

#[actix_rt::test]
async fn test_unencodable_location_passes_through() {
    // new() 不做校验；坏的 base 只能走到这里
    let gw = handle("https://api.x\n.com");
    let app = gateway_app!(gw);

    let req = TestRequest::get().uri("/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().get(LOCATION).is_none());

    let req = TestRequest::get().uri("/dashboard/transactions").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
