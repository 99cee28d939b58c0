//! HTTP routes for the relay

mod contact;

use std::path::Path;
use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::any;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::audit::AuditLog;
use crate::config::DEFAULT_STATIC_DIR;
use crate::email::EmailSender;
use crate::state::AppState;

/// Create the router with all routes
pub fn create_router<E, A>(state: Arc<AppState<E, A>>) -> Router
where
    E: EmailSender + 'static,
    A: AuditLog + 'static,
{
    create_router_with_static_path(state, DEFAULT_STATIC_DIR)
}

/// Create the router with a custom static file path
pub fn create_router_with_static_path<E, A>(
    state: Arc<AppState<E, A>>,
    static_path: impl AsRef<Path>,
) -> Router
where
    E: EmailSender + 'static,
    A: AuditLog + 'static,
{
    // Open to any origin; the form may be hosted elsewhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Every method lands in the handler so that rejections get a JSON body
        .route("/send_email", any(contact::send_email::<E, A>))
        .route("/send_email.php", any(contact::send_email::<E, A>))
        // Serve the static site
        .fallback_service(ServeDir::new(static_path))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
