use async_trait::async_trait;
use std::sync::Arc;

use imperium_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{GetSelectedBuilding, SelectedBuilding},
    },
    session::GameSession,
};

pub struct GetSelectedBuildingHandler {}

impl GetSelectedBuildingHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetSelectedBuilding> for GetSelectedBuildingHandler {
    async fn handle(
        &self,
        _query: GetSelectedBuilding,
        session: &GameSession,
        _config: &Arc<Config>,
    ) -> Result<<GetSelectedBuilding as Query>::Output, ApplicationError> {
        let base = session.base();

        Ok(session.selected_building().map(|building| SelectedBuilding {
            building: building.clone(),
            upgrade_cost: building.upgrade_cost(),
            upgradable: building.is_upgradable(),
            affordable: base.can_upgrade(building.id),
        }))
    }
}

#[cfg(test)]
mod tests {
    use imperium_types::{buildings::BuildingName, common::ResourceGroup};

    use super::*;
    use crate::test_utils::{SessionFactoryOptions, session_factory};

    #[tokio::test]
    async fn test_nothing_selected() {
        let config = Arc::new(Config::default());
        let session = session_factory(Default::default());

        let selected = GetSelectedBuildingHandler::new()
            .handle(GetSelectedBuilding, &session, &config)
            .await
            .unwrap();
        assert!(selected.is_none());
    }

    #[tokio::test]
    async fn test_selected_headquarters_is_not_upgradable() {
        let config = Arc::new(Config::default());
        let mut session = session_factory(Default::default());
        let hq_id = session.base().registry().headquarters().unwrap().id;
        session.select(Some(hq_id)).unwrap();

        let selected = GetSelectedBuildingHandler::new()
            .handle(GetSelectedBuilding, &session, &config)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(selected.building.name, BuildingName::Headquarters);
        assert!(!selected.upgradable);
        assert!(!selected.affordable);
    }

    #[tokio::test]
    async fn test_selected_building_upgrade_details() {
        let config = Arc::new(Config::default());
        let mut session = session_factory(SessionFactoryOptions {
            resources: Some(ResourceGroup::new(50, 30, 20)),
            buildings: Some(vec![BuildingName::Quarry]),
        });
        let quarry_id = session
            .base()
            .registry()
            .buildings()
            .iter()
            .find(|b| b.name == BuildingName::Quarry)
            .unwrap()
            .id;
        session.select(Some(quarry_id)).unwrap();

        let selected = GetSelectedBuildingHandler::new()
            .handle(GetSelectedBuilding, &session, &config)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(selected.upgrade_cost, ResourceGroup::new(50, 30, 20));
        assert!(selected.upgradable);
        assert!(selected.affordable);
    }
}
