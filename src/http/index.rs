// src/http/index.rs

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to CloudLab Demo App!",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "endpoints": {
            "health": "/health",
            "metrics": "/metrics",
            "info": "/info",
            "users": "/users",
        },
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
