mod config;
mod handlers;
mod response;
mod types;

use std::env;

use actix_cors::Cors;
use actix_web::{http::StatusCode, middleware, web, App, HttpServer};

use crate::config::{read_env_usize, AppState, LatencyRange, TunePolicy, DEFAULT_JSON_LIMIT_BYTES};
use crate::handlers::{catalog, health, tune};
use crate::response::json_error;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let bind_addr = env::var("API_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let json_limit = read_env_usize("JSON_LIMIT_BYTES", DEFAULT_JSON_LIMIT_BYTES);
    let state = AppState {
        policy: TunePolicy::from_env(),
        latency: LatencyRange::from_env(),
    };

    tracing::info!(
        "starting tuned-ml api: bind_addr={} max_trials={} latency_ms=[{}..={}]",
        bind_addr,
        state.policy.max_trials,
        state.latency.min_ms,
        state.latency.max_ms
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(
                web::JsonConfig::default()
                    .limit(json_limit)
                    .error_handler(|err, _req| {
                        let message = format!("Invalid request body: {err}");
                        actix_web::error::InternalError::from_response(
                            err,
                            json_error(StatusCode::BAD_REQUEST, message),
                        )
                        .into()
                    }),
            )
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(health))
            .route("/api/catalog", web::get().to(catalog))
            .route("/api/tune", web::post().to(tune))
    })
    .bind(bind_addr)?
    .run()
    .await
}
