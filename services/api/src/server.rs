use crate::cli::ServeArgs;
use crate::infra::{AppState, CommentService};
use crate::routes::with_comment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use report_comments::config::AppConfig;
use report_comments::error::AppError;
use report_comments::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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

    let service = Arc::new(CommentService::from_config(&config)?);
    let tracks = service.assembler.bank().tracks().len();

    let app = with_comment_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, tracks, "report comment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
