use std::collections::HashMap;
use std::collections::HashSet;
use std::io::{self, Write};
use std::cmp::min;
use serde_json::Value;

use crate::data::*;
use crate::config::Constants;
use crate::commands::CommandSet;
use crate::error::BotError;

pub struct Game {
    pub turn_number: usize,
    pub constants: Constants,
    pub num_players: usize,
    pub my_pid: usize,
    pub factories: Vec<Factory>,
    pub width: usize,
    pub height: usize,
    pub halite_map: GMap<usize>,

    pub ships: HashMap<usize, Ship>,
    pub ship_id_by_player: Vec<Vec<usize>>, // in the order the engine lists them
    pub ship_map: HashMap<Point, usize>,
    pub energy: Vec<usize>,
    pub my_drop_pts: Vec<Point>, // shipyard first
    pub structures: HashSet<Point>,
}

pub fn next_line<I: Iterator<Item = io::Result<String>>>(lines_iter: &mut I) -> Result<String, BotError> {
    match lines_iter.next() {
        Some(line) => Ok(line?),
        None => Err(BotError::EndOfInput),
    }
}

pub fn parse_line_of_nums<I: Iterator<Item = io::Result<String>>>(lines_iter: &mut I,
    expected: usize) -> Result<Vec<usize>, BotError> {
    let line = next_line(lines_iter)?;
    let nums = line
        .split_whitespace()
        .map(|token| token.parse::<usize>().map_err(|_| BotError::BadNumber(token.to_owned())))
        .collect::<Result<Vec<usize>, BotError>>()?;
    if nums.len() < expected {
        return Err(BotError::ShortLine { expected, line });
    }
    Ok(nums)
}

impl Game {
    pub fn init<I: Iterator<Item = io::Result<String>>>(lines_iter: &mut I,
        constant_json: Value, num_players: usize, my_pid: usize) -> Result<Game, BotError> {
        if my_pid >= num_players {
            return Err(BotError::UnknownPlayer(my_pid));
        }
        let constants = Constants::from_json(&constant_json)?;

        let mut factories: Vec<Factory> = Vec::new();
        let mut my_drop_pts: Vec<Point> = Vec::new();
        for _ in 0..num_players {
            let this_player = parse_line_of_nums(lines_iter, 3)?;
            let pos = Point {
                x: this_player[1] as isize,
                y: this_player[2] as isize,
            };
            if this_player[0] >= num_players {
                return Err(BotError::UnknownPlayer(this_player[0]));
            }
            if this_player[0] == my_pid {
                my_drop_pts.push(pos);
            }
            factories.push(Factory {
                player: this_player[0],
                pos,
            });
        }
        if my_drop_pts.is_empty() {
            return Err(BotError::UnknownPlayer(my_pid));
        }
        factories.sort_by_key(|f| f.player);

        let dims = parse_line_of_nums(lines_iter, 2)?;
        let width = dims[0];
        let height = dims[1];

        let mut h_map: Vec<Vec<usize>> = Vec::with_capacity(height);
        for _y in 0..height {
            let mut row = parse_line_of_nums(lines_iter, width)?;
            row.truncate(width);
            h_map.push(row);
        }
        info!("num_players: {}, my player id: {}\n factories: {:?}",
            num_players, my_pid, factories);
        info!("MAX_TURNS: {}", constants.max_turns);

        let structures = factories.iter().map(|f| f.pos).collect();
        Ok(Game {
            turn_number: 0,
            constants,
            num_players,
            my_pid,
            factories,
            width, height,
            halite_map: GMap { gmap: h_map },
            ships: HashMap::new(),
            ship_id_by_player: vec![Vec::new(); num_players],
            ship_map: HashMap::new(),
            energy: vec![0; num_players],
            my_drop_pts,
            structures,
        })
    }

    pub fn ready(&self, name: &str) -> Result<(), BotError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", name)?;
        out.flush()?;
        Ok(())
    }

    pub fn update_frame<I: Iterator<Item = io::Result<String>>>(&mut self, lines_iter: &mut I) -> Result<(), BotError> {
        let turn_line = next_line(lines_iter)?;
        self.turn_number = turn_line.trim().parse::<usize>()
            .map_err(|_| BotError::BadNumber(turn_line.clone()))?;

        info!("====== TURN {} ======", self.turn_number);

        for ids in self.ship_id_by_player.iter_mut() {
            ids.clear();
        }
        self.ships.clear();
        self.ship_map.clear();
        for _ in 0..self.num_players {
            let player_info = parse_line_of_nums(lines_iter, 4)?;
            let player_id = player_info[0];
            let num_ships = player_info[1];
            let num_dropoffs = player_info[2];
            if player_id >= self.num_players {
                return Err(BotError::UnknownPlayer(player_id));
            }
            self.energy[player_id] = player_info[3];

            for _ in 0..num_ships {
                let ship_info = parse_line_of_nums(lines_iter, 4)?;
                let ship_id = ship_info[0];
                let pos = Point {
                    x: ship_info[1] as isize,
                    y: ship_info[2] as isize,
                };
                self.ship_id_by_player[player_id].push(ship_id);
                self.ships.insert(ship_id, Ship {
                    player: player_id,
                    ship_id,
                    pos,
                    halite: ship_info[3],
                });
                self.ship_map.insert(pos, ship_id);
            }

            for _ in 0..num_dropoffs {
                let dropoff_info = parse_line_of_nums(lines_iter, 3)?;
                self.add_dropoff(Dropoff {
                    player: player_id,
                    pos: Point {
                        x: dropoff_info[1] as isize,
                        y: dropoff_info[2] as isize,
                    },
                });
            }
        }

        let update_line = next_line(lines_iter)?;
        let num_map_updates = update_line.trim().parse::<usize>()
            .map_err(|_| BotError::BadNumber(update_line.clone()))?;
        for _ in 0..num_map_updates {
            let map_update = parse_line_of_nums(lines_iter, 3)?;
            let pos = self.normalize(Point {
                x: map_update[0] as isize,
                y: map_update[1] as isize,
            });
            *self.halite_map.get_mut(pos) = map_update[2];
        }
        Ok(())
    }

    /// Dropoffs persist once built; ours join the base list in discovery order.
    pub fn add_dropoff(&mut self, dropoff: Dropoff) {
        let pos = self.normalize(dropoff.pos);
        self.structures.insert(pos);
        if dropoff.player == self.my_pid && !self.my_drop_pts.contains(&pos) {
            info!("new base at ({}, {})", pos.x, pos.y);
            self.my_drop_pts.push(pos);
        }
    }

    pub fn end_turn(commands: &CommandSet) -> Result<(), BotError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", commands.to_engine_line())?;
        out.flush()?;
        Ok(())
    }

    pub fn my_ships(&self) -> Vec<Ship> {
        self.ship_id_by_player[self.my_pid].iter()
            .filter_map(|id| self.ships.get(id))
            .cloned()
            .collect()
    }

    pub fn my_shipyard(&self) -> Point {
        self.my_drop_pts[0]
    }

    pub fn normalize(&self, pos: Point) -> Point {
        let width: isize = self.width as isize;
        let height: isize = self.height as isize;
        let x = ((pos.x % width) + width) % width;
        let y = ((pos.y % height) + height) % height;
        Point {x, y}
    }

    pub fn halite_at(&self, pos: Point) -> usize {
        *self.halite_map.get(self.normalize(pos))
    }

    pub fn has_structure(&self, pos: Point) -> bool {
        self.structures.contains(&self.normalize(pos))
    }

    pub fn dist(&self, pos1: Point, pos2: Point) -> usize {
        let pos1 = self.normalize(pos1);
        let pos2 = self.normalize(pos2);
        let dx = (pos1.x - pos2.x).abs() as usize;
        let dy = (pos1.y - pos2.y).abs() as usize;
        let toroidal_dx = min(dx, self.width-dx);
        let toroidal_dy = min(dy, self.height-dy);
        toroidal_dx + toroidal_dy
    }

    pub fn step_toward(&self, pos: Point, d: Direction) -> Point {
        let (dx, dy) = d.offset();
        self.normalize(Point { x: pos.x + dx, y: pos.y + dy })
    }

    // (base, distance); the shipyard wins ties
    pub fn nearest_base(&self, pos: Point) -> (Point, usize) {
        let mut best = (self.my_drop_pts[0], self.dist(pos, self.my_drop_pts[0]));
        for &base in &self.my_drop_pts[1..] {
            let d = self.dist(pos, base);
            if d < best.1 {
                best = (base, d);
            }
        }
        best
    }

    /// Directions that shorten the distance from `source` to `destination`, x axis first.
    pub fn unsafe_moves(&self, source: Point, destination: Point) -> Vec<Direction> {
        let source = self.normalize(source);
        let destination = self.normalize(destination);
        let mut moves = Vec::with_capacity(2);

        let dx = (destination.x - source.x).abs() as usize;
        if dx != 0 {
            let toward = if destination.x > source.x { Direction::East } else { Direction::West };
            moves.push(if 2*dx < self.width { toward } else { toward.invert() });
        }
        let dy = (destination.y - source.y).abs() as usize;
        if dy != 0 {
            let toward = if destination.y > source.y { Direction::South } else { Direction::North };
            moves.push(if 2*dy < self.height { toward } else { toward.invert() });
        }
        moves
    }
}

#[derive(Debug)]
pub struct GMap<T> {
    pub gmap: Vec<Vec<T>>,
}

impl <T> GMap<T> {
    pub fn get(&self, pos: Point) -> &T {
        &self.gmap[pos.y as usize][pos.x as usize]
    }

    pub fn get_mut(&mut self, pos: Point) -> &mut T {
        &mut self.gmap[pos.y as usize][pos.x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> impl Iterator<Item = io::Result<String>> + '_ {
        text.lines().map(|l| Ok(l.to_owned()))
    }

    const CONSTANTS: &str = r#"{"MAX_TURNS": 400, "NEW_ENTITY_ENERGY_COST": 1000, "DROPOFF_COST": 4000, "MAX_ENERGY": 1000}"#;

    fn small_game() -> Game {
        let header = "0 1 1\n1 3 3\n4 4\n10 20 30 40\n50 60 70 80\n1 2 3 4\n5 6 7 8\n";
        let mut it = lines(header);
        Game::init(&mut it, serde_json::from_str(CONSTANTS).unwrap(), 2, 0).unwrap()
    }

    #[test]
    fn init_reads_factories_and_halite() {
        let game = small_game();
        assert_eq!(game.width, 4);
        assert_eq!(game.my_shipyard(), Point { x: 1, y: 1 });
        assert_eq!(game.halite_at(Point { x: 2, y: 1 }), 70);
        assert_eq!(game.halite_at(Point { x: -1, y: 4 }), 40);
        assert!(game.has_structure(Point { x: 3, y: 3 }));
        assert!(!game.has_structure(Point { x: 0, y: 0 }));
    }

    #[test]
    fn frame_updates_ships_dropoffs_and_cells() {
        let mut game = small_game();
        let frame = "7\n0 2 1 2500\n4 0 0 300\n2 1 2 10\n9 3 0\n1 1 0 900\n5 3 2 0\n2\n0 0 11\n3 3 0\n";
        game.update_frame(&mut lines(frame)).unwrap();
        assert_eq!(game.turn_number, 7);
        assert_eq!(game.energy, vec![2500, 900]);
        assert_eq!(game.ship_id_by_player[0], vec![4, 2]);
        assert_eq!(game.my_drop_pts, vec![Point { x: 1, y: 1 }, Point { x: 3, y: 0 }]);
        assert!(game.has_structure(Point { x: 3, y: 0 }));
        assert_eq!(game.halite_at(Point { x: 0, y: 0 }), 11);
        assert_eq!(game.ship_map.get(&Point { x: 3, y: 2 }), Some(&5));
        let mine: Vec<usize> = game.my_ships().iter().map(|s| s.ship_id).collect();
        assert_eq!(mine, vec![4, 2]);
    }

    #[test]
    fn truncated_frame_is_an_error() {
        let mut game = small_game();
        match game.update_frame(&mut lines("3\n0 1 0 100\n")) {
            Err(BotError::EndOfInput) => (),
            other => panic!("unexpected {:?}", other.err()),
        }
        match game.update_frame(&mut lines("x\n")) {
            Err(BotError::BadNumber(_)) => (),
            other => panic!("unexpected {:?}", other.err()),
        }
    }

    #[test]
    fn only_our_dropoffs_become_bases() {
        let mut game = small_game();
        game.add_dropoff(Dropoff { player: 1, pos: Point { x: 0, y: 2 } });
        game.add_dropoff(Dropoff { player: 0, pos: Point { x: 6, y: 3 } });
        game.add_dropoff(Dropoff { player: 0, pos: Point { x: 2, y: 3 } });
        assert!(game.has_structure(Point { x: 0, y: 2 }));
        assert!(game.has_structure(Point { x: 2, y: 3 }));
        assert_eq!(game.my_drop_pts, vec![Point { x: 1, y: 1 }, Point { x: 2, y: 3 }]);
    }

    #[test]
    fn distance_and_moves_wrap_around() {
        let game = small_game();
        assert_eq!(game.dist(Point { x: 0, y: 0 }, Point { x: 3, y: 3 }), 2);
        assert_eq!(game.unsafe_moves(Point { x: 0, y: 0 }, Point { x: 3, y: 1 }),
            vec![Direction::West, Direction::South]);
        assert_eq!(game.unsafe_moves(Point { x: 0, y: 0 }, Point { x: 1, y: 0 }),
            vec![Direction::East]);
        // exactly half way round goes the inverted way
        assert_eq!(game.unsafe_moves(Point { x: 0, y: 0 }, Point { x: 0, y: 2 }),
            vec![Direction::North]);
        assert!(game.unsafe_moves(Point { x: 2, y: 2 }, Point { x: 2, y: 2 }).is_empty());
    }

    #[test]
    fn nearest_base_prefers_shipyard_on_ties() {
        let mut game = small_game();
        game.my_drop_pts.push(Point { x: 3, y: 1 });
        assert_eq!(game.nearest_base(Point { x: 2, y: 1 }), (Point { x: 1, y: 1 }, 1));
        assert_eq!(game.nearest_base(Point { x: 0, y: 1 }), (Point { x: 1, y: 1 }, 1));
        assert_eq!(game.nearest_base(Point { x: 3, y: 2 }), (Point { x: 3, y: 1 }, 1));
    }
}
