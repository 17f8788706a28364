use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::{ClassRepository, DatabaseManager};
use crate::handlers;

/// Per-process state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseManager,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: DatabaseManager, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    pub fn classes(&self) -> ClassRepository {
        ClassRepository::new(self.db.pool().clone())
    }

    pub fn date_field_enabled(&self) -> bool {
        self.config.classes.date_field_enabled
    }
}

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security.cors_origins);

    Router::new()
        .route("/health", get(handlers::health))
        .merge(class_routes())
        .fallback(handlers::not_found)
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn class_routes() -> Router<AppState> {
    use handlers::classes;

    Router::new()
        .route("/api/classes", get(classes::class_list).post(classes::class_create))
        .route(
            "/api/classes/:id",
            get(classes::class_show).delete(classes::class_delete),
        )
        .route("/api/classes/:id/duplicate", post(classes::class_duplicate))
        .route("/api/classes/:class_id/slots/:slot_id", put(classes::slot_assign))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            // A wildcard cannot be combined with credentials or an origin list
            Ok(_) if origin.trim() == "*" => {
                tracing::warn!("Ignoring wildcard CORS origin; list origins explicitly");
                None
            }
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
