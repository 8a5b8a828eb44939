pub mod errors;
pub mod handlers;

use {
    crate::AppState,
    axum::{
        Router,
        extract::DefaultBodyLimit,
        routing::{get, post, put},
    },
    std::time::Duration,
    tower_http::{timeout::TimeoutLayer, trace::TraceLayer},
};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/description", get(handlers::description))
        .route("/settings", put(handlers::configure))
        .route("/settings/validate", post(handlers::validate_settings))
        .route("/currencies/{code}", get(handlers::currency_supported))
        .route("/setup-form", post(handlers::create_setup_form))
        .route("/setup-form/validate", post(handlers::validate_setup_form))
        .route("/payments", post(handlers::prepare_payment))
        .route("/payments/status", post(handlers::check_payment_status))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
