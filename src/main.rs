use axum::{Router, Server, middleware::from_fn};
use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use fittrack_backend::{AppState, db::DbPool};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config =
        fittrack_backend::config::Config::from_env().expect("Failed to load configuration");
    fittrack_backend::init_tracing(&config);

    let addr: std::net::SocketAddr = config
        .server_address()
        .parse()
        .expect("Invalid server address");

    // Initialize database
    let manager = DbConnectionManager::<PgConnection>::new(config.db_url());
    let db: DbPool = r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .min_idle(Some(config.database_min_connections))
        .connection_timeout(std::time::Duration::from_secs(
            config.database_connection_timeout,
        ))
        .build(manager)
        .expect("Failed to create database connection pool");

    // Application state
    let state = Arc::new(AppState::new(db, config));

    // CORS configuration: the API is open to all callers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(fittrack_backend::routes::create_router(state))
        .layer(cors)
        .layer(from_fn(fittrack_backend::middleware::logger::logger));

    // Start server
    println!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
