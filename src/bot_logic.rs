use crate::collect::collect_move;
use crate::commands::{CommandSet, ShipCommand};
use crate::config::Tuning;
use crate::data::{Direction, Ship};
use crate::deposit::deposit_move;
use crate::game::Game;
use crate::grid::{CellOracle, TurnMap};
use crate::navigation::{NaiveRouter, Router};
use crate::policy::{should_spawn, FleetState, TurnInfo};
use crate::state::{Mode, ShipStates};

pub struct Logic {
	tuning: Tuning,
	states: ShipStates,
	fleet: FleetState,
}

impl Default for Logic {
	fn default() -> Logic {
		Logic::new()
	}
}

impl Logic {
	pub fn new() -> Logic {
		Logic::with_tuning(Tuning::default())
	}

	pub fn with_tuning(tuning: Tuning) -> Logic {
		Logic {
			tuning,
			states: ShipStates::new(),
			fleet: FleetState::new(),
		}
	}

	pub fn tuning(&self) -> &Tuning {
		&self.tuning
	}

	pub fn states(&self) -> &ShipStates {
		&self.states
	}

	pub fn states_mut(&mut self) -> &mut ShipStates {
		&mut self.states
	}

	pub fn fleet(&self) -> &FleetState {
		&self.fleet
	}

	pub fn make_moves(&mut self, game: &Game) -> CommandSet {
		let turn = TurnInfo::from_game(game);
		let ships = game.my_ships();
		let mut map = TurnMap::new(game);
		self.decide(&turn, &ships, &mut map, &NaiveRouter)
	}

	/// One turn of decisions. `ships` are visited in the given order; an earlier ship may
	/// push a later one by a swap, in which case the later one is not visited again.
	pub fn decide(&mut self, turn: &TurnInfo, ships: &[Ship], oracle: &mut dyn CellOracle,
		router: &dyn Router) -> CommandSet {
		let alarm = self.fleet.update_alarm(turn, &self.tuning);
		let mut commands = CommandSet::new();
		let mut stockpile = turn.stockpile;
		let mut built_this_turn = false;

		for ship in ships {
			let id = ship.ship_id;
			if commands.has_command(id) {
				continue;
			}

			let mode = self.states.settle(id, alarm, ship.halite);

			let (_, base_distance) = oracle.nearest_base(ship.pos);
			if self.fleet.may_build_base(built_this_turn, turn, stockpile, mode, base_distance, &self.tuning) {
				commands.commit(id, ShipCommand::MakeDropoff);
				built_this_turn = true;
				stockpile -= turn.dropoff_cost;
				self.fleet.record_base();
				info!("ship {} building base #{} at ({}, {})",
					id, self.fleet.bases_built, ship.pos.x, ship.pos.y);
				warn!("{{\"t\": {}, \"x\": {}, \"y\": {}, \"msg\": \"dropoff\", \"color\": \"{}\"}},",
					turn.turn_number, ship.pos.x, ship.pos.y, "#D0D000");
				continue;
			}

			match mode {
				Mode::Depositing => {
					let plan = deposit_move(oracle, router, ship, alarm, &self.states, &commands, &self.tuning);
					match plan.swap_with {
						Some(blocker) => {
							commands.force(blocker, ShipCommand::MoveShip(plan.direction.invert()));
							commands.force(id, ShipCommand::MoveShip(plan.direction));
							// the pushed ship is skipped later in the loop, so settle it now
							let blocker_halite = ships.iter()
								.find(|s| s.ship_id == blocker)
								.map_or(0, |s| s.halite);
							self.states.settle(blocker, alarm, blocker_halite);
							warn!("{{\"t\": {}, \"x\": {}, \"y\": {}, \"msg\": \"swap {} {}\", \"color\": \"{}\"}},",
								turn.turn_number, ship.pos.x, ship.pos.y, id, blocker, "#00DDDD");
						},
						None => {
							if plan.forced {
								warn!("{{\"t\": {}, \"x\": {}, \"y\": {}, \"msg\": \"ram {:?}\", \"color\": \"{}\"}},",
									turn.turn_number, ship.pos.x, ship.pos.y, plan.direction, "#DD0000");
							}
							commands.commit(id, ShipCommand::MoveShip(plan.direction));
						},
					}
				},
				Mode::Collecting => {
					let direction = collect_move(oracle, router, ship, &self.tuning);
					commands.commit(id, ShipCommand::MoveShip(direction));
					self.states.set_mode(id, mode.after_collecting(ship.halite, turn.capacity, &self.tuning));
				},
			}
		}

		let spawn = should_spawn(turn, stockpile, oracle.is_occupied(turn.shipyard), &self.tuning);
		commands.set_spawn(spawn);

		info!("turn {}: {} ships, {} commands, spawn {}, alarm {}",
			turn.turn_number, ships.len(), commands.len(), spawn, alarm);
		commands
	}
}

/// The move assigned to a ship, if it was given one.
pub fn direction_of(commands: &CommandSet, ship_id: usize) -> Option<Direction> {
	match commands.command_of(ship_id) {
		Some(ShipCommand::MoveShip(d)) => Some(d),
		_ => None,
	}
}
