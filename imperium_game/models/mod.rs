pub mod achievements;
pub mod base;
pub mod buildings;
pub mod ledger;
pub mod registry;
