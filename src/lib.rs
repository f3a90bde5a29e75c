#[macro_use] extern crate log;
extern crate serde;
extern crate simplelog;
extern crate serde_json;
extern crate thiserror;

mod game;
mod data;
mod bot_logic;
mod collect;
mod commands;
mod config;
mod deposit;
mod error;
mod grid;
mod logging;
mod navigation;
mod policy;
mod state;
#[cfg(test)]
mod fixtures;

pub use bot_logic::{Logic, direction_of};
pub use game::{Game, GMap, next_line, parse_line_of_nums};
pub use data::{Factory, Dropoff, Ship, Direction, Point};
pub use commands::{CommandSet, Intent, ShipCommand};
pub use config::{Constants, Tuning};
pub use collect::{choose_direction, collect_move, free_neighbors};
pub use deposit::{deposit_move, resolve_blocked, DepositPlan, Resolution};
pub use error::BotError;
pub use grid::{CellOracle, TurnMap};
pub use logging::init_logging;
pub use navigation::{NaiveRouter, Router};
pub use policy::{should_spawn, FleetState, TurnInfo};
pub use state::{Mode, ShipStates};
