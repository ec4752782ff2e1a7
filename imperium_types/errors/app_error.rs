use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Production worker is already running")]
    WorkerAlreadyRunning,
}
