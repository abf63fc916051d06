use log::{debug, info};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::{
    cell::Cell,
    grid::{CellRef, SeatMap},
    neighbor::{Env8Neighbors, NeighborCounter, Sight8Neighbors},
    Error,
};

/// How a seat reacts to its neighbors: an empty seat with no occupied
/// neighbor gets taken, an occupied seat with at least `leave_threshold`
/// occupied neighbors gets left.
#[derive(Debug, Clone)]
pub struct SeatRule<C> {
    counter: C,
    leave_threshold: usize,
}

impl SeatRule<Env8Neighbors> {
    pub fn adjacent() -> Self {
        Self::new(Env8Neighbors, 4)
    }
}

impl SeatRule<Sight8Neighbors> {
    pub fn visible() -> Self {
        Self::new(Sight8Neighbors, 5)
    }
}

impl<C: NeighborCounter> SeatRule<C> {
    pub fn new(counter: C, leave_threshold: usize) -> Self {
        Self {
            counter,
            leave_threshold,
        }
    }

    pub fn leave_threshold(&self) -> usize {
        self.leave_threshold
    }

    pub fn next_cell(&self, at: &CellRef<'_>) -> Cell {
        match at.cell() {
            Cell::Floor => Cell::Floor,
            Cell::Seat(false) if self.counter.occupied_around(at) == 0 => Cell::OCCUPIED,
            Cell::Seat(true) if self.counter.occupied_around(at) >= self.leave_threshold => {
                Cell::EMPTY
            }
            seat => seat,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Generation {
    pub map: SeatMap,
    pub changed: usize, // Number of seats which flipped in this generation.
}

/// Builds the next generation of `map`. Every cell is computed from `map`
/// only, so the cells can be evaluated in any order, in parallel.
pub fn step<C>(map: &SeatMap, rule: &SeatRule<C>) -> Generation
where
    C: NeighborCounter + Sync,
{
    let cells = map
        .cells()
        .par_iter()
        .enumerate()
        .map(|(ind, _)| rule.next_cell(&map.cell_ref(ind)))
        .collect::<Vec<_>>();
    let changed = cells
        .iter()
        .zip(map.cells())
        .filter(|(new, old)| new != old)
        .count();

    Generation {
        map: SeatMap::from_cells(cells, map.height(), map.width()),
        changed,
    }
}

pub fn next_generation<C>(map: &SeatMap, rule: &SeatRule<C>) -> SeatMap
where
    C: NeighborCounter + Sync,
{
    step(map, rule).map
}

/// Steps `initial` until two consecutive generations are equal. Returns the
/// fixed point and how many generations changed at least one seat.
///
/// There's no limit on the number of generations. Real layouts settle down,
/// but nothing here proves every layout does; use
/// [`run_to_fixed_point_within`] to put a bound on it.
pub fn run_to_fixed_point<C>(initial: SeatMap, rule: &SeatRule<C>) -> (SeatMap, usize)
where
    C: NeighborCounter + Sync,
{
    let mut cur_map = initial;
    let mut gen_n = 0;
    loop {
        match advance(cur_map, rule, gen_n) {
            Advance::Fixed(map) => return (map, gen_n),
            Advance::Changed(map) => {
                cur_map = map;
                gen_n += 1;
            }
        }
    }
}

/// Same as [`run_to_fixed_point`], but gives up with
/// [`Error::NotStabilized`] once more than `max_generations` generations
/// would have to change seats.
pub fn run_to_fixed_point_within<C>(
    initial: SeatMap,
    rule: &SeatRule<C>,
    max_generations: usize,
) -> Result<(SeatMap, usize), Error>
where
    C: NeighborCounter + Sync,
{
    let mut cur_map = initial;
    let mut gen_n = 0;
    loop {
        match advance(cur_map, rule, gen_n) {
            Advance::Fixed(map) => return Ok((map, gen_n)),
            Advance::Changed(_) if gen_n >= max_generations => {
                return Err(Error::NotStabilized(max_generations))
            }
            Advance::Changed(map) => {
                cur_map = map;
                gen_n += 1;
            }
        }
    }
}

enum Advance {
    Fixed(SeatMap),
    Changed(SeatMap),
}

fn advance<C>(cur_map: SeatMap, rule: &SeatRule<C>, gen_n: usize) -> Advance
where
    C: NeighborCounter + Sync,
{
    // Same size, so no changed seat means the two maps are equal.
    let Generation { map, changed } = step(&cur_map, rule);
    if changed == 0 {
        info!(
            "Reached fixed point after {} generation(s), {} seat(s) occupied.",
            gen_n,
            map.occupied_count()
        );
        return Advance::Fixed(map);
    }

    debug!("Generation {}: {} seat(s) changed.", gen_n + 1, changed);
    Advance::Changed(map)
}
