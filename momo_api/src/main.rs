mod config;
mod errors;
mod handlers;
mod state;

use actix_web::{App, HttpServer, middleware, middleware::Logger, web};
use dotenv::dotenv;
use pretty_env_logger::env_logger::{Builder, Env};

use crate::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let logger_env = Env::default().default_filter_or("debug");
    let mut logger_builder = Builder::from_env(logger_env);
    logger_builder.init();

    if cli::run_cli().await {
        return Ok(());
    }

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Application initialization failed: {:#}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    if config.uses_default_credentials() {
        log::warn!("API_USERNAME/API_PASSWORD not set, using the default credentials");
    }

    let state = config.create_app_state().await;
    log::info!(
        "Loaded {} transactions from {}",
        state.store.count().await,
        config.transactions_xml
    );

    let data = web::Data::new(state);

    log::info!(
        "Starting transaction API on http://{}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(middleware::from_fn(handlers::require_basic_auth))
            .wrap(errors::json_errors())
            .wrap(handlers::cors_headers())
            .wrap(Logger::new("%a %t %r %s  %{Referer}i %Dms"))
            .configure(handlers::configure)
            .default_service(web::to(handlers::fallback))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
