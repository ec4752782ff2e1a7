use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use imperium_types::{
    buildings::BuildingName,
    common::ResourceGroup,
    errors::GameError,
    map::{GRID_SIZE, Position},
};

use super::{
    buildings::{Building, construction_cost},
    ledger::ResourceLedger,
};

pub const HEADQUARTERS_POSITION: Position = Position::new(2, 2);
const MAX_BUILDINGS: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Buildings placed on the grid. Always holds exactly one headquarters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRegistry {
    buildings: Vec<Building>,
}

impl BuildingRegistry {
    /// Returns a registry with the headquarters in the middle of the grid.
    pub fn new() -> Self {
        Self {
            buildings: vec![Building::new(
                BuildingName::Headquarters,
                HEADQUARTERS_POSITION,
            )],
        }
    }

    /// Pays for a new building and puts it on a random free cell.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        name: BuildingName,
        ledger: &mut ResourceLedger,
        rng: &mut R,
    ) -> Result<Building, GameError> {
        if name.is_headquarters() {
            return Err(GameError::HeadquartersAlreadyPresent);
        }

        let free_cells = self.free_cells();
        let position = *free_cells.choose(rng).ok_or(GameError::GridFull)?;

        ledger.debit(&construction_cost(&name))?;

        let building = Building::new(name, position);
        self.buildings.push(building.clone());
        Ok(building)
    }

    /// Places a building on a given cell without charging for it.
    pub fn add_building_at(
        &mut self,
        name: BuildingName,
        position: Position,
    ) -> Result<Building, GameError> {
        if name.is_headquarters() {
            return Err(GameError::HeadquartersAlreadyPresent);
        }
        if !position.is_valid() {
            return Err(GameError::InvalidPosition(position));
        }
        if self.at(&position).is_some() {
            return Err(GameError::PositionOccupied(position));
        }

        let building = Building::new(name, position);
        self.buildings.push(building.clone());
        Ok(building)
    }

    /// Pays for the next level of a building and applies it.
    pub fn upgrade(
        &mut self,
        id: Uuid,
        ledger: &mut ResourceLedger,
    ) -> Result<Building, GameError> {
        let idx = self
            .buildings
            .iter()
            .position(|b| b.id == id)
            .ok_or(GameError::BuildingNotFound(id))?;

        let building = &self.buildings[idx];
        if !building.is_upgradable() {
            return Err(GameError::BuildingNotUpgradable(building.name));
        }

        ledger.debit(&building.upgrade_cost())?;

        let building = &mut self.buildings[idx];
        building.level += 1;
        Ok(building.clone())
    }

    /// Returns the cost of upgrading a building to its next level.
    pub fn upgrade_cost(&self, id: Uuid) -> Result<ResourceGroup, GameError> {
        self.get(id)
            .map(Building::upgrade_cost)
            .ok_or(GameError::BuildingNotFound(id))
    }

    pub fn buildings(&self) -> &Vec<Building> {
        &self.buildings
    }

    pub fn get(&self, id: Uuid) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    /// Returns the building on a given cell, if any.
    pub fn at(&self, position: &Position) -> Option<&Building> {
        self.buildings.iter().find(|b| b.position == *position)
    }

    pub fn headquarters(&self) -> Option<&Building> {
        self.buildings.iter().find(|b| b.name.is_headquarters())
    }

    /// Total number of buildings, headquarters included.
    pub fn count(&self) -> usize {
        self.buildings.len()
    }

    pub fn count_of(&self, name: &BuildingName) -> usize {
        self.buildings.iter().filter(|b| b.name == *name).count()
    }

    /// Number of distinct building types present, headquarters excluded.
    pub fn distinct_constructed(&self) -> usize {
        self.buildings
            .iter()
            .filter(|b| !b.name.is_headquarters())
            .map(|b| b.name)
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn is_full(&self) -> bool {
        self.buildings.len() >= MAX_BUILDINGS
    }

    /// Every unoccupied cell, row by row.
    pub fn free_cells(&self) -> Vec<Position> {
        Position::all().filter(|p| self.at(p).is_none()).collect()
    }

    /// Resources produced by all buildings on a single tick.
    pub fn production(&self) -> ResourceGroup {
        self.buildings
            .iter()
            .fold(ResourceGroup::default(), |acc, b| acc + b.production())
    }
}

impl Default for BuildingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
