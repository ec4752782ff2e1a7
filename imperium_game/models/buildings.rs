use serde::{Deserialize, Serialize};
use uuid::Uuid;

use imperium_types::{buildings::BuildingName, common::ResourceGroup, map::Position};

/// Amount of resources every producer adds on each tick.
pub const PRODUCTION_PER_TICK: u32 = 5;

/// Upgrade cost for a level 1 building, multiplied by the current level.
pub const UPGRADE_COST_PER_LEVEL: ResourceGroup = ResourceGroup::new(50, 30, 20);

/// Static rules of a building type.
#[derive(Debug, Clone)]
pub struct BuildingData {
    pub cost: ResourceGroup,
    pub production: ResourceGroup,
    pub upgradable: bool,
}

static HEADQUARTERS: BuildingData = BuildingData {
    cost: ResourceGroup::new(0, 0, 0),
    production: ResourceGroup::new(0, 0, 0),
    upgradable: false,
};

static BARRACKS: BuildingData = BuildingData {
    cost: ResourceGroup::new(100, 50, 30),
    production: ResourceGroup::new(0, 0, 0),
    upgradable: true,
};

static MINE: BuildingData = BuildingData {
    cost: ResourceGroup::new(80, 40, 20),
    production: ResourceGroup::new(PRODUCTION_PER_TICK, 0, 0),
    upgradable: true,
};

static LUMBERMILL: BuildingData = BuildingData {
    cost: ResourceGroup::new(60, 30, 40),
    production: ResourceGroup::new(0, PRODUCTION_PER_TICK, 0),
    upgradable: true,
};

static QUARRY: BuildingData = BuildingData {
    cost: ResourceGroup::new(70, 35, 25),
    production: ResourceGroup::new(0, 0, PRODUCTION_PER_TICK),
    upgradable: true,
};

pub fn get_building_data(name: &BuildingName) -> &'static BuildingData {
    match name {
        BuildingName::Headquarters => &HEADQUARTERS,
        BuildingName::Barracks => &BARRACKS,
        BuildingName::Mine => &MINE,
        BuildingName::Lumbermill => &LUMBERMILL,
        BuildingName::Quarry => &QUARRY,
    }
}

/// Returns the construction cost of a building type.
pub fn construction_cost(name: &BuildingName) -> ResourceGroup {
    get_building_data(name).cost
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: Uuid,
    pub name: BuildingName,
    pub level: u32,
    pub position: Position,
}

impl Building {
    pub fn new(name: BuildingName, position: Position) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            level: 1,
            position,
        }
    }

    /// Resources this building adds on every production tick.
    pub fn production(&self) -> ResourceGroup {
        get_building_data(&self.name).production
    }

    pub fn is_upgradable(&self) -> bool {
        get_building_data(&self.name).upgradable
    }

    /// Cost of going from the current level to the next one.
    pub fn upgrade_cost(&self) -> ResourceGroup {
        UPGRADE_COST_PER_LEVEL * self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_table() {
        assert_eq!(
            construction_cost(&BuildingName::Barracks),
            ResourceGroup::new(100, 50, 30)
        );
        assert_eq!(
            construction_cost(&BuildingName::Mine),
            ResourceGroup::new(80, 40, 20)
        );
        assert_eq!(
            construction_cost(&BuildingName::Lumbermill),
            ResourceGroup::new(60, 30, 40)
        );
        assert_eq!(
            construction_cost(&BuildingName::Quarry),
            ResourceGroup::new(70, 35, 25)
        );
        assert!(construction_cost(&BuildingName::Headquarters).is_zero());
    }

    #[test]
    fn test_upgrade_cost_scales_with_level() {
        let mut mine = Building::new(BuildingName::Mine, Position::new(0, 0));
        assert_eq!(mine.upgrade_cost(), ResourceGroup::new(50, 30, 20));

        mine.level = 2;
        assert_eq!(mine.upgrade_cost(), ResourceGroup::new(100, 60, 40));

        mine.level = 7;
        assert_eq!(mine.upgrade_cost(), ResourceGroup::new(350, 210, 140));
    }

    #[test]
    fn test_only_producers_produce() {
        let at = Position::new(1, 1);
        assert_eq!(
            Building::new(BuildingName::Mine, at).production(),
            ResourceGroup::new(5, 0, 0)
        );
        assert_eq!(
            Building::new(BuildingName::Lumbermill, at).production(),
            ResourceGroup::new(0, 5, 0)
        );
        assert_eq!(
            Building::new(BuildingName::Quarry, at).production(),
            ResourceGroup::new(0, 0, 5)
        );
        assert!(Building::new(BuildingName::Barracks, at).production().is_zero());
        assert!(Building::new(BuildingName::Headquarters, at).production().is_zero());
    }

    #[test]
    fn test_headquarters_is_not_upgradable() {
        let hq = Building::new(BuildingName::Headquarters, Position::new(2, 2));
        assert!(!hq.is_upgradable());
        assert!(Building::new(BuildingName::Barracks, Position::new(0, 0)).is_upgradable());
    }
}
