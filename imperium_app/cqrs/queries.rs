use serde::{Deserialize, Serialize};
use uuid::Uuid;

use imperium_game::models::{achievements::Achievement, buildings::Building};
use imperium_types::{buildings::BuildingName, common::ResourceGroup, map::Position};

use crate::cqrs::Query;

/// Everything a view needs to draw the game.
pub struct GetSnapshot;

impl Query for GetSnapshot {
    type Output = GameSnapshot;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub position: Position,
    pub building: Option<Building>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub resources: ResourceGroup,
    /// Resources credited on every production tick.
    pub production: ResourceGroup,
    pub buildings: Vec<Building>,
    pub achievements: Vec<Achievement>,
    pub selected: Option<Uuid>,
    /// All 25 cells, row by row.
    pub grid: Vec<GridCell>,
}

/// Costs of every constructible building and whether they can be paid.
pub struct GetBuildOptions;

impl Query for GetBuildOptions {
    type Output = Vec<BuildOption>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOption {
    pub name: BuildingName,
    pub cost: ResourceGroup,
    pub affordable: bool,
}

/// The building under the selection cursor with its upgrade details.
pub struct GetSelectedBuilding;

impl Query for GetSelectedBuilding {
    type Output = Option<SelectedBuilding>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedBuilding {
    pub building: Building,
    pub upgrade_cost: ResourceGroup,
    pub upgradable: bool,
    pub affordable: bool,
}
