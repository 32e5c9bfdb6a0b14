use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryInterviewRepository, InMemoryUserRepository};
use crate::routes::with_recruitment_routes;
use crate::seed::{self, SeedOptions};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use recruitment::config::AppConfig;
use recruitment::error::AppError;
use recruitment::interviews::InterviewService;
use recruitment::telemetry;
use recruitment::users::UserRegistrationService;
use std::sync::atomic::{AtomicBool, Ordering};
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
    if args.no_seed {
        config.seeding.on_startup = false;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let users = Arc::new(InMemoryUserRepository::default());
    let interviews = Arc::new(InMemoryInterviewRepository::default());

    if config.seeding.on_startup {
        let report = seed::run(
            users.as_ref(),
            interviews.as_ref(),
            SeedOptions {
                target_users: config.seeding.target_users,
                rng_seed: config.seeding.rng_seed,
            },
        )?;
        info!(
            total_users = report.total_users,
            total_interviews = report.total_interviews,
            rng_seed = report.rng_seed,
            "sample data ready"
        );
    }

    let registration_service = Arc::new(UserRegistrationService::new(users.clone()));
    let interview_service = Arc::new(InterviewService::new(interviews, users));

    let app = with_recruitment_routes(registration_service, interview_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "recruitment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
