use thiserror::Error;
use uuid::Uuid;

use crate::{buildings::BuildingName, map::Position};

/// Errors for domain logic (game rules).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough resources")]
    NotEnoughResources,

    #[error("Building {0} not found")]
    BuildingNotFound(Uuid),

    #[error("Building {0} can't be upgraded")]
    BuildingNotUpgradable(BuildingName),

    #[error("Headquarters can only be built once")]
    HeadquartersAlreadyPresent,

    #[error("No free cells left on the grid")]
    GridFull,

    #[error("Position {0} is already occupied")]
    PositionOccupied(Position),

    #[error("Position {0} is outside the grid")]
    InvalidPosition(Position),
}
