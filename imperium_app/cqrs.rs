mod command;
mod query;

pub mod commands;
pub mod queries;

pub use command::*;
pub use query::*;
