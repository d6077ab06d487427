use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use spark_api::config::AppConfig;
use spark_api::{routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    spark_shared::middleware::init_tracing("spark-api");

    let config = AppConfig::load()?;
    let port = config.port;

    let db = spark_shared::clients::db::create_pool(&config.database_url, config.db_pool_size)?;

    let state = Arc::new(AppState::new(config, db));

    let app = Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/user/create", post(routes::register::create_user))
        .route("/user/login", post(routes::login::login))
        .route("/user", get(routes::me::me))
        .route(
            "/user/profile",
            get(routes::profile::get_profile).put(routes::profile::update_profile),
        )
        .route(
            "/user/preferences",
            post(routes::preferences::create_preferences)
                .get(routes::preferences::get_preferences)
                .put(routes::preferences::update_preferences)
                .delete(routes::preferences::delete_preferences),
        )
        .route(
            "/matches",
            post(routes::matches::create_match).get(routes::matches::list_matches),
        )
        .route("/matches/:id/status", put(routes::matches::update_match_status))
        .route("/matches/:id", delete(routes::matches::delete_match))
        .route("/messages", post(routes::messages::send_message))
        .route("/messages/:id/read", put(routes::messages::mark_message_read))
        .route("/messages/:id", delete(routes::messages::delete_message))
        .route("/conversations/:user_id", get(routes::messages::get_conversation))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(addr = %addr, "spark-api starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
