mod place_building;
mod select_building;
mod upgrade_building;

pub use place_building::PlaceBuildingCommandHandler;
pub use select_building::SelectBuildingCommandHandler;
pub use upgrade_building::UpgradeBuildingCommandHandler;
