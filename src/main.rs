use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use item_catalog::config::EnvConfig;
use item_catalog::db::database_service::DatabaseService;
use item_catalog::routes::configure_routes;
use item_catalog::utils::telemetry;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = EnvConfig::from_env().map_err(std::io::Error::other)?;
    telemetry::init(&config.log_level);

    let database_service = Arc::new(
        DatabaseService::new(&config.database)
            .await
            .map_err(std::io::Error::other)?
    );

    let addr = (config.host.clone(), config.port);
    let cors_origins = config.cors_origins.clone();
    info!(origins = ?cors_origins, "CORS enabled");
    info!("Starting server on {}:{}", addr.0, addr.1);

    let db = Arc::clone(&database_service);
    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(Arc::clone(&db)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await?;

    info!("Server stopped, closing database pool.");
    database_service.close().await.map_err(std::io::Error::other)?;
    Ok(())
}
