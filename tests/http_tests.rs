// tests/http_tests.rs

use actix_web::{test, web, App, HttpResponse};
use serde_json::Value;
use std::time::Duration;

use cloudlab_server::{http, metrics::HttpMetrics, middleware::RequestMetrics};

#[actix_web::test]
async fn index_lists_endpoints() {
    let app = test::init_service(App::new().configure(http::routes::init_routes)).await;

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(body["endpoints"]["metrics"], "/metrics");
    assert_eq!(body["endpoints"]["health"], "/health");
    assert!(body["message"].as_str().unwrap().contains("CloudLab"));
}

#[actix_web::test]
async fn health_reports_healthy_with_uptime() {
    let app = test::init_service(App::new().configure(http::routes::init_routes)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
}

#[actix_web::test]
async fn users_returns_sample_data() {
    let app = test::init_service(App::new().configure(http::routes::init_routes)).await;

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/users").to_request())
            .await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"][0]["name"], "John Doe");
}

#[actix_web::test]
async fn unknown_path_returns_json_404() {
    let app = test::init_service(
        App::new()
            .configure(http::routes::init_routes)
            .default_service(web::route().to(http::routes::not_found)),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/no/such/route").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["path"], "/no/such/route");
}

#[actix_web::test]
async fn metrics_endpoint_exposes_instrumented_requests() {
    let metrics = HttpMetrics::new().unwrap();
    let app = test::init_service(
        App::new()
            .wrap(RequestMetrics::new(metrics.clone()))
            .app_data(web::Data::new(metrics.clone()))
            .configure(http::routes::init_routes),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    assert!(resp.status().is_success());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.contains("# TYPE http_requests_total counter"));
    assert!(text.contains("# TYPE http_request_duration_seconds histogram"));
    assert!(
        text.contains(r#"http_requests_total{method="GET",route="/users",status_code="200"} 1"#)
    );
    assert!(text.contains(
        r#"http_request_duration_seconds_count{method="GET",route="/users",status_code="200"} 1"#
    ));
}

#[actix_web::test]
async fn unmatched_paths_share_one_route_label() {
    let metrics = HttpMetrics::new().unwrap();
    let app = test::init_service(
        App::new()
            .wrap(RequestMetrics::new(metrics.clone()))
            .configure(http::routes::init_routes)
            .default_service(web::route().to(http::routes::not_found)),
    )
    .await;

    for uri in ["/scan/1", "/scan/2", "/scan/3"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), 404);
    }

    let text = metrics.render().unwrap();
    assert!(
        text.contains(r#"http_requests_total{method="GET",route="unmatched",status_code="404"} 3"#)
    );
    assert!(!text.contains("/scan/"));
}

#[actix_web::test]
async fn handler_error_status_is_recorded() {
    let metrics = HttpMetrics::new().unwrap();
    let app = test::init_service(
        App::new()
            .wrap(RequestMetrics::new(metrics.clone()))
            .route(
                "/boom",
                web::get().to(|| async {
                    Err::<&'static str, actix_web::Error>(
                        actix_web::error::ErrorInternalServerError("boom"),
                    )
                }),
            ),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/boom").to_request()).await;
    assert_eq!(resp.status(), 500);

    let text = metrics.render().unwrap();
    assert!(
        text.contains(r#"http_requests_total{method="GET",route="/boom",status_code="500"} 1"#)
    );
}

#[actix_web::test]
async fn aborted_request_records_nothing() {
    let metrics = HttpMetrics::new().unwrap();
    let app = test::init_service(
        App::new()
            .wrap(RequestMetrics::new(metrics.clone()))
            .route(
                "/slow",
                web::get().to(|| async {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    HttpResponse::Ok().finish()
                }),
            ),
    )
    .await;

    // Enter the handler, then drop the in-flight request mid-sleep.
    let call = Box::pin(test::call_service(
        &app,
        test::TestRequest::get().uri("/slow").to_request(),
    ));
    let timeout = Box::pin(tokio::time::sleep(Duration::from_millis(20)));
    drop(futures_util::future::select(call, timeout).await);

    let text = metrics.render().unwrap();
    assert!(!text.contains("http_requests_total{"));
}
