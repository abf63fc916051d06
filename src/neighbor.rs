use crate::grid::{CellRef, Direction, Position, SeatMap};

/// Counts the occupied seats that the seat at `at` takes into account.
///
/// `at` is always inside its map, so the count is never more than 8.
pub trait NeighborCounter {
    fn occupied_around(&self, at: &CellRef<'_>) -> usize;
}

/// The 8 cells touching the seat. Cells past the edge don't count.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env8Neighbors;

impl NeighborCounter for Env8Neighbors {
    fn occupied_around(&self, at: &CellRef<'_>) -> usize {
        let map = at.map();
        Direction::all()
            .iter()
            .filter_map(|dir| at.pos().along_dir(*dir))
            .filter(|p| map.cell(p).is_some_and(|cell| cell.is_occupied()))
            .count()
    }
}

/// The first seat seen in each of the 8 directions. Floor doesn't block the
/// view, so at most one seat is counted per direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sight8Neighbors;

impl Sight8Neighbors {
    fn first_seat_occupied(map: &SeatMap, pos: &Position, dir: Direction) -> bool {
        let mut cur_pos = pos.along_dir(dir);
        while let Some(p) = cur_pos {
            match map.cell(&p) {
                Some(cell) if cell.is_seat() => return cell.is_occupied(),
                Some(_) => cur_pos = p.along_dir(dir),
                None => break,
            }
        }

        false
    }
}

impl NeighborCounter for Sight8Neighbors {
    fn occupied_around(&self, at: &CellRef<'_>) -> usize {
        Direction::all()
            .iter()
            .filter(|dir| Self::first_seat_occupied(at.map(), at.pos(), **dir))
            .count()
    }
}
