use std::env;
use std::sync::Arc;

use axum::http::{header, Method};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use taskboard_server::{app, state::AppState, store::FileStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let port = env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "db".to_string());

    let store = FileStore::open(&data_dir).expect("failed to create data directory");
    let state = AppState::new(Arc::new(store));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let app = app(state).layer(cors);

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await.unwrap();
    log::info!("server running on http://{addr}");
    axum::serve(listener, app).await.unwrap();
}
