use async_trait::async_trait;
use std::sync::Arc;

use imperium_types::{errors::ApplicationError, map::Position};

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{GameSnapshot, GetSnapshot, GridCell},
    },
    session::GameSession,
};

pub struct GetSnapshotHandler {}

impl GetSnapshotHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetSnapshot> for GetSnapshotHandler {
    async fn handle(
        &self,
        _query: GetSnapshot,
        session: &GameSession,
        _config: &Arc<Config>,
    ) -> Result<<GetSnapshot as Query>::Output, ApplicationError> {
        let base = session.base();
        let registry = base.registry();

        let grid = Position::all()
            .map(|position| GridCell {
                position,
                building: registry.at(&position).cloned(),
            })
            .collect();

        Ok(GameSnapshot {
            resources: base.stored_resources(),
            production: registry.production(),
            buildings: registry.buildings().clone(),
            achievements: base.achievements().achievements().clone(),
            selected: session.selected(),
            grid,
        })
    }
}
