use crate::config::Tuning;
use crate::data::Point;
use crate::game::Game;
use crate::state::Mode;

/// What the fleet policy needs to know about the current turn.
#[derive(Debug, Clone)]
pub struct TurnInfo {
	pub turn_number: usize,
	pub max_turns: usize,
	pub stockpile: usize,
	pub width: usize,
	pub ship_cost: usize,
	pub dropoff_cost: usize,
	pub capacity: usize,
	pub shipyard: Point,
}

impl TurnInfo {
	pub fn from_game(game: &Game) -> TurnInfo {
		TurnInfo {
			turn_number: game.turn_number,
			max_turns: game.constants.max_turns,
			stockpile: game.energy[game.my_pid],
			width: game.width,
			ship_cost: game.constants.ship_cost,
			dropoff_cost: game.constants.dropoff_cost,
			capacity: game.constants.max_halite,
			shipyard: game.my_shipyard(),
		}
	}

	pub fn turns_left(&self) -> usize {
		self.max_turns.saturating_sub(self.turn_number)
	}

	fn before_share(&self, share: f64) -> bool {
		(self.turn_number as f64) < self.max_turns as f64 * share
	}
}

/// Game-long counters. The alarm, once raised, stays raised.
#[derive(Debug, Clone, Default)]
pub struct FleetState {
	pub bases_built: usize,
	pub alarm: bool,
}

impl FleetState {
	pub fn new() -> FleetState {
		FleetState::default()
	}

	pub fn update_alarm(&mut self, turn: &TurnInfo, tuning: &Tuning) -> bool {
		if !self.alarm && turn.turns_left() <= tuning.alarm_turns_left {
			info!("alarm raised on turn {} with {} turns left", turn.turn_number, turn.turns_left());
			self.alarm = true;
		}
		self.alarm
	}

	pub fn base_budget(width: usize, tuning: &Tuning) -> usize {
		width / tuning.dropoff_width_divisor.max(1)
	}

	/// Whether the ship should turn itself into a base this turn.
	pub fn may_build_base(&self, built_this_turn: bool, turn: &TurnInfo, stockpile: usize,
		mode: Mode, base_distance: usize, tuning: &Tuning) -> bool {
		self.bases_built < FleetState::base_budget(turn.width, tuning)
			&& !built_this_turn
			&& stockpile > turn.dropoff_cost
			&& mode == Mode::Depositing
			&& turn.before_share(tuning.dropoff_until)
			&& base_distance as f64 > turn.width as f64 * tuning.dropoff_distance_ratio
	}

	pub fn record_base(&mut self) {
		self.bases_built += 1;
	}
}

pub fn should_spawn(turn: &TurnInfo, stockpile: usize, shipyard_occupied: bool, tuning: &Tuning) -> bool {
	(turn.turn_number as f64) <= turn.max_turns as f64 * tuning.spawn_until
		&& stockpile >= turn.ship_cost
		&& !shipyard_occupied
}
