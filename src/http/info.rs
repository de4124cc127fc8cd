// src/http/info.rs

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::config;

#[get("/info")]
pub async fn info() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "app": "CloudLab Demo App",
        "version": env!("CARGO_PKG_VERSION"),
        "platform": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "uptime": config::uptime_secs(),
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(info);
}
