use uuid::Uuid;

use imperium_types::buildings::BuildingName;

use crate::cqrs::Command;

#[derive(Debug, Clone)]
pub struct PlaceBuilding {
    pub name: BuildingName,
}

impl Command for PlaceBuilding {}

#[derive(Debug, Clone)]
pub struct UpgradeBuilding {
    pub building_id: Uuid,
}

impl Command for UpgradeBuilding {}

#[derive(Debug, Clone)]
pub struct SelectBuilding {
    pub building_id: Option<Uuid>,
}

impl Command for SelectBuilding {}
