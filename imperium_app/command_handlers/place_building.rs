use std::sync::Arc;
use tracing::{info, instrument, warn};

use imperium_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::PlaceBuilding},
    notifications::Notification,
    session::GameSession,
};

pub struct PlaceBuildingCommandHandler {}

impl Default for PlaceBuildingCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceBuildingCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<PlaceBuilding> for PlaceBuildingCommandHandler {
    #[instrument(skip_all, fields(name = ?command.name))]
    async fn handle(
        &self,
        command: PlaceBuilding,
        session: &mut GameSession,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        match session.place_building(command.name) {
            Ok(building) => {
                info!(id = %building.id, position = %building.position, "Building placed");
                session.notify(Notification::building_placed(&building));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Building not placed");
                session.notify(Notification::build_failed(&e));
                Err(e.into())
            }
        }
    }
}
