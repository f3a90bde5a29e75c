use std::collections::HashMap;

use crate::config::Tuning;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
	Collecting,
	Depositing,
}

impl Default for Mode {
	fn default() -> Mode {
		Mode::Collecting
	}
}

impl Mode {
	/// Transition applied before a ship is routed: the alarm sends everyone home,
	/// and an emptied depositor goes back to collecting.
	pub fn settle(self, alarm: bool, halite: usize) -> Mode {
		if alarm {
			Mode::Depositing
		} else if self == Mode::Depositing && halite == 0 {
			Mode::Collecting
		} else {
			self
		}
	}

	/// Transition applied once a collector has its command for the turn.
	pub fn after_collecting(self, halite: usize, capacity: usize, tuning: &Tuning) -> Mode {
		if self == Mode::Collecting && tuning.is_nearly_full(halite, capacity) {
			Mode::Depositing
		} else {
			self
		}
	}
}

/// Per-ship modes, kept for the whole game. Entries of destroyed ships are never pruned;
/// ship ids are not reused within a game.
#[derive(Debug, Default)]
pub struct ShipStates {
	modes: HashMap<usize, Mode>,
}

impl ShipStates {
	pub fn new() -> ShipStates {
		ShipStates::default()
	}

	/// Unseen ships read as collecting.
	pub fn mode_of(&self, ship_id: usize) -> Mode {
		self.modes.get(&ship_id).cloned().unwrap_or_default()
	}

	pub fn is_known(&self, ship_id: usize) -> bool {
		self.modes.contains_key(&ship_id)
	}

	pub fn set_mode(&mut self, ship_id: usize, mode: Mode) {
		if self.modes.insert(ship_id, mode) != Some(mode) {
			info!("ship {} -> {:?}", ship_id, mode);
		}
	}

	pub fn settle(&mut self, ship_id: usize, alarm: bool, halite: usize) -> Mode {
		let mode = self.modes.entry(ship_id).or_insert(Mode::Collecting);
		let next = mode.settle(alarm, halite);
		if next != *mode {
			info!("ship {} -> {:?}", ship_id, next);
			*mode = next;
		}
		next
	}

	pub fn len(&self) -> usize {
		self.modes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.modes.is_empty()
	}
}
