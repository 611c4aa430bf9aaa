use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryResultRepository};
use crate::routes::with_quiz_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hps::config::AppConfig;
use hps::error::AppError;
use hps::quiz::{QuizEngine, QuizService};
use hps::telemetry;
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

    let engine = Arc::new(QuizEngine::standard()?);
    info!(
        questions = engine.bank().len(),
        types = engine.catalog().profiles().len(),
        "quiz data validated"
    );
    let repository = Arc::new(InMemoryResultRepository::with_capacity(
        config.storage.result_capacity,
    ));
    let quiz_service = Arc::new(QuizService::new(engine, repository));

    let app = with_quiz_routes(quiz_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        result_capacity = config.storage.result_capacity,
        "hps quiz service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
