//! Hand-built boards for unit tests. Player 0 is us; its shipyard starts at the origin
//! and the enemy shipyard at the centre.

use std::collections::{HashMap, HashSet};

use crate::config::Constants;
use crate::data::*;
use crate::game::{Game, GMap};

pub struct Board {
    game: Game,
}

impl Board {
    pub fn new(size: usize) -> Board {
        let centre = Point { x: (size / 2) as isize, y: (size / 2) as isize };
        let origin = Point { x: 0, y: 0 };
        let mut structures = HashSet::new();
        structures.insert(origin);
        structures.insert(centre);
        Board {
            game: Game {
                turn_number: 1,
                constants: Constants {
                    max_turns: 400,
                    ship_cost: 1000,
                    dropoff_cost: 4000,
                    max_halite: 1000,
                },
                num_players: 2,
                my_pid: 0,
                factories: vec![
                    Factory { player: 0, pos: origin },
                    Factory { player: 1, pos: centre },
                ],
                width: size,
                height: size,
                halite_map: GMap { gmap: vec![vec![0; size]; size] },
                ships: HashMap::new(),
                ship_id_by_player: vec![Vec::new(), Vec::new()],
                ship_map: HashMap::new(),
                energy: vec![0, 0],
                my_drop_pts: vec![origin],
                structures,
            },
        }
    }

    pub fn halite(mut self, x: isize, y: isize, amount: usize) -> Board {
        *self.game.halite_map.get_mut(Point { x, y }) = amount;
        self
    }

    pub fn fill(mut self, amount: usize) -> Board {
        for row in self.game.halite_map.gmap.iter_mut() {
            for cell in row.iter_mut() {
                *cell = amount;
            }
        }
        self
    }

    pub fn ship(mut self, player: usize, ship_id: usize, x: isize, y: isize, halite: usize) -> Board {
        let pos = Point { x, y };
        self.game.ship_id_by_player[player].push(ship_id);
        self.game.ships.insert(ship_id, Ship { player, ship_id, pos, halite });
        self.game.ship_map.insert(pos, ship_id);
        self
    }

    pub fn dropoff(mut self, player: usize, x: isize, y: isize) -> Board {
        self.game.add_dropoff(Dropoff { player, pos: Point { x, y } });
        self
    }

    pub fn turn(mut self, turn_number: usize) -> Board {
        self.game.turn_number = turn_number;
        self
    }

    pub fn stockpile(mut self, halite: usize) -> Board {
        self.game.energy[0] = halite;
        self
    }

    pub fn build(self) -> Game {
        self.game
    }
}
