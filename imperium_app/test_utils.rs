use rand::{SeedableRng, rngs::StdRng};
use std::sync::Arc;

use imperium_game::test_utils::{BaseFactoryOptions, base_factory};
use imperium_types::{buildings::BuildingName, common::ResourceGroup};

use crate::{app_bus::GameBus, config::Config, session::GameSession};

#[derive(Default, Clone)]
pub struct SessionFactoryOptions {
    pub resources: Option<ResourceGroup>,
    pub buildings: Option<Vec<BuildingName>>,
}

/// Returns a session with a seeded random source.
pub fn session_factory(options: SessionFactoryOptions) -> GameSession {
    let base = base_factory(BaseFactoryOptions {
        resources: options.resources,
        buildings: options.buildings,
    });
    GameSession::from_base(base, StdRng::seed_from_u64(0))
}

pub fn bus_factory(session: GameSession) -> GameBus {
    GameBus::new(Arc::new(Config::default()), session)
}
