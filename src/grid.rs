use std::collections::HashMap;

use crate::data::{Direction, Point, Ship};
use crate::game::Game;

/// What the decision code may ask of the world during a turn.
pub trait CellOracle {
    fn me(&self) -> usize;
    fn offset(&self, pos: Point, d: Direction) -> Point;
    fn distance(&self, a: Point, b: Point) -> usize;
    fn halite_at(&self, pos: Point) -> usize;
    /// A ship stands here or has claimed the cell this turn.
    fn is_occupied(&self, pos: Point) -> bool;
    fn has_structure(&self, pos: Point) -> bool;
    /// The claimant of the cell if any, else the ship standing on it.
    fn ship_at(&self, pos: Point) -> Option<Ship>;
    fn nearest_base(&self, pos: Point) -> (Point, usize);
    fn unsafe_directions(&self, from: Point, to: Point) -> Vec<Direction>;
    fn mark_unsafe(&mut self, pos: Point, ship_id: usize);
}

/// A `Game` snapshot plus the cells claimed so far this turn.
pub struct TurnMap<'a> {
    game: &'a Game,
    marks: HashMap<Point, usize>,
}

impl<'a> TurnMap<'a> {
    pub fn new(game: &'a Game) -> TurnMap<'a> {
        TurnMap {
            game,
            marks: HashMap::new(),
        }
    }

    pub fn claimed(&self) -> usize {
        self.marks.len()
    }
}

impl<'a> CellOracle for TurnMap<'a> {
    fn me(&self) -> usize {
        self.game.my_pid
    }

    fn offset(&self, pos: Point, d: Direction) -> Point {
        self.game.step_toward(pos, d)
    }

    fn distance(&self, a: Point, b: Point) -> usize {
        self.game.dist(a, b)
    }

    fn halite_at(&self, pos: Point) -> usize {
        self.game.halite_at(pos)
    }

    fn is_occupied(&self, pos: Point) -> bool {
        let pos = self.game.normalize(pos);
        self.marks.contains_key(&pos) || self.game.ship_map.contains_key(&pos)
    }

    fn has_structure(&self, pos: Point) -> bool {
        self.game.has_structure(pos)
    }

    fn ship_at(&self, pos: Point) -> Option<Ship> {
        let pos = self.game.normalize(pos);
        self.marks.get(&pos)
            .or_else(|| self.game.ship_map.get(&pos))
            .and_then(|id| self.game.ships.get(id))
            .cloned()
    }

    fn nearest_base(&self, pos: Point) -> (Point, usize) {
        self.game.nearest_base(pos)
    }

    fn unsafe_directions(&self, from: Point, to: Point) -> Vec<Direction> {
        self.game.unsafe_moves(from, to)
    }

    fn mark_unsafe(&mut self, pos: Point, ship_id: usize) {
        let pos = self.game.normalize(pos);
        self.marks.insert(pos, ship_id);
    }
}
