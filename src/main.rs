//! # Ruchky API
//!
//! A pet adoption and marketplace backend serving a breed catalog, pet
//! profiles and listings over a JSON API.
//!
//! ## Features
//!
//! - Breed catalog with free-text life-span and weight range filtering
//! - Pet and listing queries joined across owners and organizations
//! - Seeded from a validated JSON config file
//! - REST API behind a bearer API key with per-key rate limiting
//!
//! ## Architecture
//!
//! The service is built using Actix-web and provides:
//! - HTTP endpoints under `/api/v1`
//! - In-memory repository implementations
//! - A uniform `ApiResponse` envelope
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use std::sync::Arc;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{
    dev::Service,
    middleware::{self, Logger},
    web, App, HttpResponse, HttpServer,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;
use utoipa::OpenApi;

use ruchky_api::{
    api,
    bootstrap::{initialize_app_state, process_config_file},
    config::{self, ApiKeyRateLimit, SeedConfig},
    constants::is_public_endpoint,
    logging::setup_logging,
    openapi::ApiDoc,
    utils::check_authorization_header,
};

fn load_config_file(config_file_path: &str) -> Result<SeedConfig> {
    config::load_config(config_file_path).wrap_err("Failed to load config file")
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize error reporting with eyre
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    setup_logging();

    let config = Arc::new(config::ServerConfig::from_env());
    let config_file = load_config_file(&config.config_file_path)?;

    let app_state = initialize_app_state().await?;

    info!("Processing config file");
    process_config_file(config_file, &app_state).await?;

    // Rate limit configuration
    let rate_limit_config = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit_requests_per_second)
        .key_extractor(ApiKeyRateLimit)
        .burst_size(config.rate_limit_burst_size)
        .finish()
        .unwrap();

    let enable_swagger = config.enable_swagger;
    let moved_cfg = Arc::clone(&config);
    info!("Starting server on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        let config = Arc::clone(&moved_cfg);
        let app = App::new()
            .wrap_fn(move |req, srv| {
                if is_public_endpoint(req.path())
                    || check_authorization_header(&req, &config.api_key)
                {
                    return srv.call(req);
                }

                Box::pin(async move {
                    Ok(req.into_response(
                        HttpResponse::Unauthorized().body(
                            r#"{ "success": false, "data": null, "error": "Unauthorized" }"#
                                .to_string(),
                        ),
                    ))
                })
            })
            .wrap(Governor::new(&rate_limit_config))
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .service(web::scope("/api/v1").configure(api::routes::configure_routes));

        if enable_swagger {
            app.route(
                "/api/v1/api-docs",
                web::get().to(|| async {
                    HttpResponse::Ok().json(ApiDoc::openapi())
                }),
            )
        } else {
            app
        }
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind server to {}:{}", config.host, config.port))?
    .shutdown_timeout(5)
    .run()
    .await
    .wrap_err("Server runtime error")
}
