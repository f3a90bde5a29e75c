use crate::data::{Direction, Point, Ship};
use crate::grid::CellOracle;

pub trait Router {
    /// One step from `ship` toward `target` that does not run into an occupied cell,
    /// or `Still` when there is none.
    fn route_one_step(&self, oracle: &mut dyn CellOracle, ship: &Ship, target: Point) -> Direction;
}

/// Takes the first distance-reducing move onto a free cell and claims that cell.
pub struct NaiveRouter;

impl Router for NaiveRouter {
    fn route_one_step(&self, oracle: &mut dyn CellOracle, ship: &Ship, target: Point) -> Direction {
        for d in oracle.unsafe_directions(ship.pos, target) {
            let next_pos = oracle.offset(ship.pos, d);
            if !oracle.is_occupied(next_pos) {
                oracle.mark_unsafe(next_pos, ship.ship_id);
                return d;
            }
        }
        Direction::Still
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Board;
    use crate::grid::TurnMap;

    #[test]
    fn takes_first_free_axis_and_claims_it() {
        let game = Board::new(8)
            .ship(0, 1, 3, 3, 0)
            .ship(0, 2, 4, 3, 0)
            .build();
        let mut map = TurnMap::new(&game);
        let ship = game.ships[&1].clone();

        // x axis blocked by ship 2, so the y move is used
        let d = NaiveRouter.route_one_step(&mut map, &ship, Point { x: 5, y: 5 });
        assert_eq!(d, Direction::South);
        assert!(map.is_occupied(Point { x: 3, y: 4 }));

        let other = Ship { player: 0, ship_id: 9, pos: Point { x: 2, y: 4 }, halite: 0 };
        let d = NaiveRouter.route_one_step(&mut map, &other, Point { x: 3, y: 4 });
        assert_eq!(d, Direction::Still);
    }

    #[test]
    fn staying_put_claims_nothing() {
        let game = Board::new(8).ship(0, 1, 3, 3, 0).build();
        let mut map = TurnMap::new(&game);
        let ship = game.ships[&1].clone();
        assert_eq!(NaiveRouter.route_one_step(&mut map, &ship, ship.pos), Direction::Still);
        assert_eq!(map.claimed(), 0);
    }
}
