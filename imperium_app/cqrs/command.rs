use async_trait::async_trait;
use imperium_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, session::GameSession};

/// A marker trait for Command structs.
/// Commands are operations that change the state of the game.
pub trait Command: Send + Sync {}

/// A trait for handlers that execute Commands.
/// It receives the command and exclusive access to the session.
/// It should NOT run the achievement evaluator nor publish notifications;
/// that is the job of the GameBus.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        session: &mut GameSession,
        config: &Arc<Config>,
    ) -> Result<(), ApplicationError>;
}
