use async_trait::async_trait;
use std::sync::Arc;

use imperium_game::models::buildings::construction_cost;
use imperium_types::{buildings::BuildingName, errors::ApplicationError};

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{BuildOption, GetBuildOptions},
    },
    session::GameSession,
};

pub struct GetBuildOptionsHandler {}

impl GetBuildOptionsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetBuildOptions> for GetBuildOptionsHandler {
    async fn handle(
        &self,
        _query: GetBuildOptions,
        session: &GameSession,
        _config: &Arc<Config>,
    ) -> Result<<GetBuildOptions as Query>::Output, ApplicationError> {
        let base = session.base();

        Ok(BuildingName::constructible()
            .into_iter()
            .map(|name| BuildOption {
                name,
                cost: construction_cost(&name),
                affordable: base.can_build(&name),
            })
            .collect())
    }
}
