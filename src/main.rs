use {
    instapay::{
        AppState,
        adapters::instapay::InstaPay,
        config::AppConfig,
        domain::method::PaymentMethod,
    },
    tokio::signal,
    tracing_subscriber::EnvFilter,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env().expect("invalid configuration");

    let mut method = InstaPay::new();
    let errors = method.validate_settings("", config.settings.clone());
    if errors.is_empty() {
        method.configure(config.settings);
        tracing::info!("payment method configured from environment");
    } else {
        for error in &errors {
            tracing::warn!(%error, "environment settings rejected");
        }
        tracing::warn!("starting unconfigured, waiting for PUT /settings");
    }

    let app = instapay::transport::http::app(AppState::new(method));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("failed to bind");
    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
