use axum::extract::DefaultBodyLimit;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, books, favorites, meta, reviews};
use crate::state::AppState;

/// Build the axum router with all Bookstand endpoints.
pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.uploads_root);

    let mut router = Router::new()
        .route("/health", get(meta::health))
        .route("/info", get(meta::info))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/user/:id", put(auth::update_user))
        .route("/book-items", post(books::create_book).get(books::list_books))
        .route(
            "/book-items/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route(
            "/favorites/star/:id",
            post(favorites::star).delete(favorites::unstar),
        )
        .route("/favorites/stars", get(favorites::stars))
        .nest_service("/uploads", uploads)
        .route("/reviews", post(reviews::create_review))
        .route("/reviews/:id", get(reviews::list_reviews))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &state.config.cors_origin {
        match origin.parse::<HeaderValue>() {
            Ok(origin) => {
                router = router.layer(
                    CorsLayer::new()
                        .allow_origin(origin)
                        .allow_credentials(true)
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_headers([CONTENT_TYPE]),
                );
            }
            Err(err) => {
                tracing::warn!(%err, origin, "invalid CORS origin, layer disabled");
            }
        }
    }

    router.with_state(state)
}
