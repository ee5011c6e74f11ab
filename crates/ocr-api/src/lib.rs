//! HTTP API for the company registry filing service.
//!
//! Thin axum layer over [`ocr_store::RegistryStore`]: handlers translate
//! requests into store calls and store errors into JSON error bodies. All
//! authorization lives in the middleware stack and the store's own role
//! checks.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use ocr_store::RegistryStore;

pub mod auth;
pub mod error;
pub mod handlers;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RegistryStore>,
}

/// Build the full router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // company-side submitter surface
    let user_routes = Router::new()
        .route("/company", get(handlers::company::get_company))
        .route(
            "/events/new",
            get(handlers::events::new_event_catalog).post(handlers::events::submit_event),
        )
        .route(
            "/applications/:id/resubmit",
            post(handlers::applications::resubmit),
        )
        .layer(middleware::from_fn(auth::require_company_user));

    let staff_routes = Router::new()
        .route("/reviews", get(handlers::reviews::queue))
        .route("/reviews/:id/action", post(handlers::reviews::apply_action))
        .layer(middleware::from_fn(auth::require_staff));

    let admin_routes = Router::new()
        .route(
            "/admin/events",
            get(handlers::admin::list_event_types).post(handlers::admin::upsert_event_type),
        )
        .route(
            "/admin/templates",
            get(handlers::admin::list_templates).post(handlers::admin::save_template),
        )
        .route(
            "/admin/users",
            get(handlers::admin::list_users).post(handlers::admin::create_user),
        )
        .route("/admin/audit", get(handlers::admin::audit_trail))
        .layer(middleware::from_fn(auth::require_admin));

    // everything behind a session
    let protected = Router::new()
        .route("/logout", post(handlers::auth::logout))
        .route("/me", get(handlers::auth::me))
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route("/applications", get(handlers::applications::list))
        .route("/applications/:id", get(handlers::applications::detail))
        .merge(user_routes)
        .merge(staff_routes)
        .merge(admin_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    let public = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/login", post(handlers::auth::login));

    public
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
