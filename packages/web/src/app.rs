use std::sync::Arc;

use api::Settings;
use axum::{
    routing::{get, post},
    Router,
};
use store::Store;
use time::Duration;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer, SessionStore};

use crate::routes;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

/// All routes, with sessions kept in `session_store`.
pub fn router<S>(state: AppState, session_store: S, settings: &Settings) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(settings.session.days)));

    Router::new()
        .route("/", get(routes::index))
        .route("/login", get(routes::login_page).post(routes::login))
        .route("/register", get(routes::register_page).post(routes::register))
        .route("/logout", get(routes::logout))
        .route("/dashboard", get(routes::dashboard))
        .route("/search", post(routes::search))
        .route("/create", post(routes::create))
        .route("/edit", post(routes::edit))
        .route("/delete", post(routes::delete))
        .route("/editsettings", post(routes::edit_settings))
        .nest_service("/statics", ServeDir::new(&settings.server.statics))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
