use imperium_types::{buildings::BuildingName, common::ResourceGroup};

use crate::models::{
    achievements::AchievementBook,
    base::Base,
    ledger::{ResourceLedger, STARTING_RESOURCES},
    registry::BuildingRegistry,
};

#[derive(Default, Clone)]
pub struct LedgerFactoryOptions {
    pub resources: Option<ResourceGroup>,
}

#[derive(Default, Clone)]
pub struct RegistryFactoryOptions {
    /// Extra buildings placed on the first free cells, row by row.
    pub buildings: Option<Vec<BuildingName>>,
}

#[derive(Default, Clone)]
pub struct BaseFactoryOptions {
    pub resources: Option<ResourceGroup>,
    pub buildings: Option<Vec<BuildingName>>,
}

pub fn ledger_factory(options: LedgerFactoryOptions) -> ResourceLedger {
    ResourceLedger::new(options.resources.unwrap_or(STARTING_RESOURCES))
}

pub fn registry_factory(options: RegistryFactoryOptions) -> BuildingRegistry {
    let mut registry = BuildingRegistry::new();

    for name in options.buildings.unwrap_or_default() {
        let position = registry.free_cells()[0];
        registry.add_building_at(name, position).unwrap();
    }
    registry
}

/// Returns a base with the given resources and buildings. Achievements are
/// left untouched, so they unlock on the first evaluation.
pub fn base_factory(options: BaseFactoryOptions) -> Base {
    let ledger = ledger_factory(LedgerFactoryOptions {
        resources: options.resources,
    });
    let registry = registry_factory(RegistryFactoryOptions {
        buildings: options.buildings,
    });

    Base::from_parts(ledger, registry, AchievementBook::new())
}
