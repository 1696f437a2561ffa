//! API routes
//!
//! | Method | Path          | Extractors               | Store call  |
//! |--------|---------------|--------------------------|-------------|
//! | POST   | `/books`      | `ValidBook`              | `add`       |
//! | GET    | `/books`      | `ValidFilter`            | `list`      |
//! | GET    | `/books/{id}` | `BookId`                 | `get`       |
//! | PUT    | `/books/{id}` | `BookId` + `ValidBook`   | `replace`   |
//! | DELETE | `/books/{id}` | `BookId`                 | `remove`    |

use crate::config::{CorsOrigins, ServerConfig};
use crate::handlers;
use crate::state::AppState;
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

const LOCAL_DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Build the CORS layer for the configured origins
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => {
            AllowOrigin::list(list.iter().filter_map(|s| s.parse::<HeaderValue>().ok()))
        }
        CorsOrigins::LocalDev => {
            AllowOrigin::list(LOCAL_DEV_ORIGINS.into_iter().map(HeaderValue::from_static))
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/books", get(handlers::list_books).post(handlers::add_book))
        .route(
            "/books/:id",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}
