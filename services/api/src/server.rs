use crate::infra::AppState;
use crate::routes::with_site_routes;
use agro_advisor::config::AppConfig;
use agro_advisor::error::AppError;
use agro_advisor::telemetry;
use agro_advisor::workflows::assistant::ResponderResolver;
use agro_advisor::workflows::intake::ServiceCatalog;
use agro_advisor::workflows::questionnaire::QuestionnaireService;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let resolver = Arc::new(ResponderResolver::from_config(&config.assistant)?);
    match &config.assistant.provider {
        Some(provider) => info!(
            provider = provider.label(),
            model = provider.model(),
            "assistant using remote completion"
        ),
        None => info!("no assistant API key configured, replies come from the fallback table"),
    }

    let app = with_site_routes(
        Arc::new(QuestionnaireService::harvest()),
        resolver,
        Arc::new(ServiceCatalog::agro()),
    )
    .layer(Extension(app_state))
    .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "agro advisor api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
