use crate::cli::ServeArgs;
use crate::infra::{AppState, Stores};
use crate::routes::app_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lostfound::config::AppConfig;
use lostfound::error::AppError;
use lostfound::telemetry;
use lostfound::workflows::admin::AdminAuthenticator;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let authenticator = AdminAuthenticator::new(config.admin.clone());
    if !authenticator.is_configured() {
        warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set; admin login is disabled");
    }

    let stores = Stores::default();
    let app = app_router(&stores, authenticator)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lost and found api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
