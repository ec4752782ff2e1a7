use std::sync::Arc;
use tracing::debug;

use imperium_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::SelectBuilding},
    session::GameSession,
};

pub struct SelectBuildingCommandHandler {}

impl Default for SelectBuildingCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuildingCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<SelectBuilding> for SelectBuildingCommandHandler {
    async fn handle(
        &self,
        command: SelectBuilding,
        session: &mut GameSession,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        session.select(command.building_id)?;
        debug!(selected = ?command.building_id, "Selection changed");
        Ok(())
    }
}
