use crate::config::Tuning;
use crate::data::{Direction, Point, Ship};
use crate::grid::CellOracle;
use crate::navigation::Router;

/// Halite on each unoccupied cardinal neighbour, in `Direction::cardinals` order.
pub fn free_neighbors(oracle: &dyn CellOracle, pos: Point) -> Vec<(Direction, usize)> {
	Direction::cardinals().iter()
		.map(|&d| (d, oracle.offset(pos, d)))
		.filter(|&(_, p)| !oracle.is_occupied(p))
		.map(|(d, p)| (d, oracle.halite_at(p)))
		.collect()
}

/// Greedy local choice for a collector: mine here unless a neighbour holds more than twice as much.
pub fn choose_direction(carried: usize, here: usize, neighbors: &[(Direction, usize)], tuning: &Tuning) -> Direction {
	if neighbors.is_empty() || tuning.is_light_cargo(carried, here) || here > tuning.rich_cell {
		return Direction::Still;
	}

	// first strictly greatest wins
	let mut best = neighbors[0];
	for &(d, halite) in &neighbors[1..] {
		if halite > best.1 {
			best = (d, halite);
		}
	}

	if here > best.1 / 2 {
		Direction::Still
	} else {
		best.0
	}
}

pub fn collect_move(oracle: &mut dyn CellOracle, router: &dyn Router, ship: &Ship, tuning: &Tuning) -> Direction {
	let neighbors = free_neighbors(&*oracle, ship.pos);
	let here = oracle.halite_at(ship.pos);
	let desired = choose_direction(ship.halite, here, &neighbors, tuning);
	let target = oracle.offset(ship.pos, desired);
	router.route_one_step(oracle, ship, target)
}
