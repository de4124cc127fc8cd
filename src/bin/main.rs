use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use cloudlab_server::{config, http, metrics::HttpMetrics, middleware::RequestMetrics};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    config::mark_started();

    let settings = config::settings();

    // Collector names are fixed; a duplicate here is a programming error
    // and the process must not come up with a broken registry.
    let metrics = HttpMetrics::new().expect("metrics registration failed");

    log::info!("listening on {}", settings.server_addr);
    log::info!("metrics exposed at /metrics");

    let handle = metrics.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(RequestMetrics::new(handle.clone()))
            .wrap(Cors::permissive())
            .app_data(web::Data::new(handle.clone()))
            .configure(http::routes::init_routes)
            .default_service(web::route().to(http::routes::not_found))
    })
    .bind(&settings.server_addr)?
    .run()
    .await
}
