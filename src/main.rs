use std::net::SocketAddr;
use term_planner::api::app_state::{ScheduleState, TrackerState};
use term_planner::api::{create_schedule_app, create_tracker_app};
use term_planner::config::loader::ConfigLoader;
use term_planner::error::AppError;
use term_planner::models::tracker::{Assignment, Exam};
use term_planner::observability::init_tracing;
use term_planner::storage::surrealdb::SurrealPool;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;
    init_tracing(&config.logging, &config.app_name)
        .map_err(|e| AppError::Internal(format!("Failed to init tracing: {}", e)))?;
    info!("Starting {} ({})", config.app_name, config.environment);

    let db_pool = SurrealPool::new(config.database.clone()).await?;
    info!("Database connection initialized: {}", config.database.url);

    let schedule_app = create_schedule_app(ScheduleState::from_pool(&db_pool));
    let assignment_app = create_tracker_app(TrackerState::<Assignment>::from_pool(&db_pool));
    let exam_app = create_tracker_app(TrackerState::<Exam>::from_pool(&db_pool));

    let host = &config.server.host;
    let schedule_listener = bind(host, config.server.schedule_port).await?;
    let assignment_listener = bind(host, config.server.assignment_port).await?;
    let exam_listener = bind(host, config.server.exam_port).await?;

    tokio::try_join!(
        async {
            axum::serve(schedule_listener, schedule_app)
                .with_graceful_shutdown(shutdown_signal())
                .await
        },
        async {
            axum::serve(assignment_listener, assignment_app)
                .with_graceful_shutdown(shutdown_signal())
                .await
        },
        async {
            axum::serve(exam_listener, exam_app)
                .with_graceful_shutdown(shutdown_signal())
                .await
        },
    )?;

    info!("Shut down cleanly");
    Ok(())
}

async fn bind(host: &str, port: u16) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind(format!("{}:{}", host, port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!("Listening on {}", addr);
    Ok(listener)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
