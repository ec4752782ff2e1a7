mod get_build_options;
mod get_selected_building;
mod get_snapshot;

pub use get_build_options::GetBuildOptionsHandler;
pub use get_selected_building::GetSelectedBuildingHandler;
pub use get_snapshot::GetSnapshotHandler;
