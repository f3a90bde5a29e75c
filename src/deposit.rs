use crate::commands::CommandSet;
use crate::config::Tuning;
use crate::data::{Direction, Point, Ship};
use crate::grid::CellOracle;
use crate::navigation::Router;
use crate::state::{Mode, ShipStates};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	Unresolved,
	/// move into the blocked cell regardless
	Force(Direction),
	/// move, and push the friendly blocker the opposite way
	Swap { direction: Direction, blocker: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositPlan {
	pub direction: Direction,
	pub swap_with: Option<usize>,
	pub forced: bool,
}

impl DepositPlan {
	fn step(direction: Direction) -> DepositPlan {
		DepositPlan { direction, swap_with: None, forced: false }
	}
}

/// Walks the blocked moves toward `base` and looks for a way through.
///
/// In order, per candidate cell: during the alarm a structure is always entered; an enemy is
/// rammed if it sits next to the base, otherwise the search ends there; a friendly ship is
/// swapped with when it really stands on the cell, carries at least `cargo_ratio` of its
/// cell, is not depositing and has not already been pushed this turn.
pub fn resolve_blocked(oracle: &dyn CellOracle, ship: &Ship, base: Point, alarm: bool,
	states: &ShipStates, commands: &CommandSet, tuning: &Tuning) -> Resolution {
	for d in oracle.unsafe_directions(ship.pos, base) {
		let target_pos = oracle.offset(ship.pos, d);

		if alarm && oracle.has_structure(target_pos) {
			return Resolution::Force(d);
		}

		let blocker = match oracle.ship_at(target_pos) {
			Some(blocker) => blocker,
			None => continue,
		};

		if blocker.player != oracle.me() {
			if oracle.distance(blocker.pos, base) <= 1 {
				return Resolution::Force(d);
			}
			// an enemy anywhere else ends the search, remaining candidates included
			return Resolution::Unresolved;
		}

		// the cell may only be claimed by a ship that is still elsewhere
		if blocker.pos != target_pos || tuning.is_light_cargo(blocker.halite, oracle.halite_at(blocker.pos)) {
			continue;
		}

		if states.mode_of(blocker.ship_id) != Mode::Depositing && !commands.is_exclusive(blocker.ship_id) {
			return Resolution::Swap { direction: d, blocker: blocker.ship_id };
		}
	}
	Resolution::Unresolved
}

pub fn deposit_move(oracle: &mut dyn CellOracle, router: &dyn Router, ship: &Ship, alarm: bool,
	states: &ShipStates, commands: &CommandSet, tuning: &Tuning) -> DepositPlan {
	let (base, _) = oracle.nearest_base(ship.pos);
	let direction = router.route_one_step(oracle, ship, base);
	if direction != Direction::Still {
		return DepositPlan::step(direction);
	}

	match resolve_blocked(&*oracle, ship, base, alarm, states, commands, tuning) {
		Resolution::Unresolved => DepositPlan::step(Direction::Still),
		Resolution::Force(direction) => {
			info!("ship {} forcing {:?} toward base", ship.ship_id, direction);
			DepositPlan { direction, swap_with: None, forced: true }
		},
		Resolution::Swap { direction, blocker } => {
			info!("ship {} swapping {:?} with ship {}", ship.ship_id, direction, blocker);
			DepositPlan { direction, swap_with: Some(blocker), forced: false }
		},
	}
}
