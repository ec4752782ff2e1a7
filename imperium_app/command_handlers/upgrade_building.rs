use std::sync::Arc;
use tracing::{info, instrument, warn};

use imperium_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpgradeBuilding},
    notifications::Notification,
    session::GameSession,
};

pub struct UpgradeBuildingCommandHandler {}

impl Default for UpgradeBuildingCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpgradeBuildingCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpgradeBuilding> for UpgradeBuildingCommandHandler {
    #[instrument(skip_all, fields(building_id = %command.building_id))]
    async fn handle(
        &self,
        command: UpgradeBuilding,
        session: &mut GameSession,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        match session.upgrade_building(command.building_id) {
            Ok(building) => {
                info!(level = building.level, "Building upgraded");
                session.notify(Notification::building_upgraded(&building));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Building not upgraded");
                session.notify(Notification::upgrade_failed(&e));
                Err(e.into())
            }
        }
    }
}
