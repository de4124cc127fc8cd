use crate::http;
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

/// Mount every HTTP sub-module at the root.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(http::index::init_routes)
        .configure(http::health::init_routes)
        .configure(http::info::init_routes)
        .configure(http::users::init_routes)
        .configure(http::metrics::init_routes);
}

/// Fallback for unregistered paths; wire with `App::default_service`.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "error": "Not Found",
        "path": req.path(),
    }))
}
