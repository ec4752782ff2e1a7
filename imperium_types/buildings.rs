use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
pub enum BuildingName {
    Headquarters,
    Barracks,
    Mine,
    Lumbermill,
    Quarry,
}

impl BuildingName {
    /// Buildings a player can place, in build menu order.
    pub const fn constructible() -> [BuildingName; 4] {
        [
            BuildingName::Barracks,
            BuildingName::Mine,
            BuildingName::Lumbermill,
            BuildingName::Quarry,
        ]
    }

    pub fn is_headquarters(&self) -> bool {
        matches!(self, BuildingName::Headquarters)
    }
}

impl fmt::Display for BuildingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildingName::Headquarters => "Headquarters",
            BuildingName::Barracks => "Barracks",
            BuildingName::Mine => "Gold Mine",
            BuildingName::Lumbermill => "Lumbermill",
            BuildingName::Quarry => "Quarry",
        };

        f.write_str(name)
    }
}
