use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::{task::JoinHandle, time};
use tracing::{debug, info, instrument};

use imperium_types::errors::{AppError, ApplicationError};

use crate::app_bus::GameBus;

/// Credits production on a fixed interval for the lifetime of a session.
pub struct ProductionWorker {
    bus: Arc<GameBus>,
    period: Duration,
    running: Arc<AtomicBool>,
}

impl ProductionWorker {
    pub fn new(bus: Arc<GameBus>) -> Self {
        let period = bus.config().production_interval();
        Self::with_period(bus, period)
    }

    pub fn with_period(bus: Arc<GameBus>, period: Duration) -> Self {
        Self {
            bus,
            period,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Run worker loop inside a tokio task.
    ///
    /// The first tick lands one full period after start. Production stops
    /// when the returned handle is cancelled or dropped.
    pub fn run(self: Arc<Self>) -> Result<ProductionHandle, ApplicationError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(AppError::WorkerAlreadyRunning.into());
        }

        let running = self.running.clone();
        let worker = self;
        let task = tokio::spawn(async move {
            let mut interval = time::interval(worker.period);
            // the first tick of an interval completes immediately
            interval.tick().await;
            info!(period_ms = worker.period.as_millis() as u64, "Production worker started");

            loop {
                interval.tick().await;
                worker.tick().await;
            }
        });

        Ok(ProductionHandle {
            task: Some(task),
            running,
        })
    }

    #[instrument(skip_all)]
    async fn tick(&self) {
        let produced = self.bus.produce().await;
        debug!(
            gold = produced.gold(),
            wood = produced.wood(),
            stone = produced.stone(),
            "Production credited"
        );
    }
}

/// Owns the running production task. Dropping it stops production.
pub struct ProductionHandle {
    task: Option<JoinHandle<()>>,
    running: Arc<AtomicBool>,
}

impl ProductionHandle {
    /// Stops the worker and waits for its task to wind down.
    pub async fn cancel(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            // an aborted task always resolves to a cancellation error
            let _ = task.await;
        }
        self.running.store(false, Ordering::SeqCst);
        info!("Production worker stopped");
    }
}

impl Drop for ProductionHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.running.store(false, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use imperium_types::{buildings::BuildingName, common::ResourceGroup};

    use super::*;
    use crate::{
        command_handlers::PlaceBuildingCommandHandler,
        cqrs::{commands::PlaceBuilding, queries::GetSnapshot},
        queries_handlers::GetSnapshotHandler,
        test_utils::{SessionFactoryOptions, bus_factory, session_factory},
    };

    async fn resources(bus: &GameBus) -> ResourceGroup {
        bus.query(GetSnapshot, GetSnapshotHandler::new())
            .await
            .unwrap()
            .resources
    }

    #[tokio::test(start_paused = true)]
    async fn test_worker_credits_every_period() {
        let bus = Arc::new(bus_factory(session_factory(SessionFactoryOptions {
            resources: Some(ResourceGroup::default()),
            buildings: Some(vec![BuildingName::Lumbermill, BuildingName::Quarry]),
        })));
        let worker = Arc::new(ProductionWorker::new(bus.clone()));
        let handle = worker.clone().run().unwrap();

        time::sleep(Duration::from_millis(1900)).await;
        assert!(resources(&bus).await.is_zero(), "No tick before one period");

        time::sleep(Duration::from_millis(4200)).await;
        // three ticks, +50 gold for the first building
        assert_eq!(resources(&bus).await, ResourceGroup::new(50, 15, 15));

        handle.cancel().await;
        assert!(!worker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_worker_reads_buildings_on_every_tick() {
        let bus = Arc::new(bus_factory(session_factory(Default::default())));
        let worker = Arc::new(ProductionWorker::new(bus.clone()));
        let _handle = worker.run().unwrap();

        time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(resources(&bus).await, ResourceGroup::new(200, 150, 100));

        bus.execute(
            PlaceBuilding {
                name: BuildingName::Mine,
            },
            PlaceBuildingCommandHandler::new(),
        )
        .await
        .unwrap();
        assert_eq!(resources(&bus).await, ResourceGroup::new(170, 110, 80));

        time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(resources(&bus).await, ResourceGroup::new(175, 110, 80));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_worker_stops_producing() {
        let bus = Arc::new(bus_factory(session_factory(SessionFactoryOptions {
            resources: Some(ResourceGroup::default()),
            buildings: Some(vec![BuildingName::Mine]),
        })));
        let worker = Arc::new(ProductionWorker::new(bus.clone()));
        let handle = worker.clone().run().unwrap();

        time::sleep(Duration::from_millis(2100)).await;
        // 5 produced, +50 for the first building
        assert_eq!(resources(&bus).await, ResourceGroup::new(55, 0, 0));

        handle.cancel().await;
        time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(resources(&bus).await, ResourceGroup::new(55, 0, 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_worker_runs_once() {
        let bus = Arc::new(bus_factory(session_factory(Default::default())));
        let worker = Arc::new(ProductionWorker::new(bus));

        let handle = worker.clone().run().unwrap();
        assert!(matches!(
            worker.clone().run(),
            Err(ApplicationError::App(AppError::WorkerAlreadyRunning))
        ));

        drop(handle);
        assert!(!worker.is_running());
        assert!(worker.clone().run().is_ok());
    }
}
