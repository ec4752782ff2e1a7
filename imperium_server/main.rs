use std::sync::Arc;
use tokio::{sync::broadcast, task::JoinHandle};

use imperium_app::{
    app_bus::GameBus,
    config::Config,
    cqrs::queries::GetSnapshot,
    jobs::worker::ProductionWorker,
    notifications::{Notification, Severity},
    queries_handlers::GetSnapshotHandler,
    session::GameSession,
};
use imperium_types::{ApplicationError, Result};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();
    let (config, bus) = setup_app();
    tracing::info!(
        interval_ms = config.production_interval().as_millis() as u64,
        "Session started"
    );

    let listener = spawn_notification_listener(bus.subscribe());
    bus.publish_pending().await;
    let worker = Arc::new(ProductionWorker::new(bus.clone()));
    let production = worker.run()?;

    log_snapshot(&bus).await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
    tracing::info!("Shutting down session");

    production.cancel().await;
    log_snapshot(&bus).await?;
    listener.abort();

    Ok(())
}

fn setup_app() -> (Arc<Config>, Arc<GameBus>) {
    let config = Arc::new(Config::from_env());
    let session = GameSession::new(&config);
    let bus = Arc::new(GameBus::new(config.clone(), session));
    (config, bus)
}

/// Forwards every notification to the log until the bus goes away.
fn spawn_notification_listener(mut rx: broadcast::Receiver<Notification>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(n) if n.severity == Severity::Error => {
                    tracing::warn!(title = %n.title, "{}", n.description)
                }
                Ok(n) => tracing::info!(title = %n.title, "{}", n.description),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Notification listener lagged behind")
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

async fn log_snapshot(bus: &GameBus) -> Result<(), ApplicationError> {
    let snapshot = bus.query(GetSnapshot, GetSnapshotHandler::new()).await?;
    tracing::debug!(snapshot = %serde_json::to_string(&snapshot)?, "Current state");
    tracing::info!(
        gold = snapshot.resources.gold(),
        wood = snapshot.resources.wood(),
        stone = snapshot.resources.stone(),
        buildings = snapshot.buildings.len(),
        "Resources"
    );
    Ok(())
}
