//! Exposition endpoint scraped by Prometheus.

use actix_web::{get, web, HttpResponse, Responder};

use crate::metrics::{HttpMetrics, MetricsRegistry};

#[get("/metrics")]
pub async fn metrics(metrics: web::Data<HttpMetrics>) -> impl Responder {
    match metrics.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type(MetricsRegistry::content_type())
            .body(body),
        // Must fail loudly rather than serve partial exposition text.
        Err(err) => {
            log::error!("metrics render failed: {err}");
            HttpResponse::InternalServerError().body("metrics unavailable")
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(metrics);
}
