//! Simple liveness probe

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::config;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "uptime": config::uptime_secs(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
