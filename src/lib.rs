use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::Parser;

mod cell;
mod grid;
mod neighbor;
mod sim;

pub use cell::Cell;
pub use grid::{CellRef, Direction, Position, SeatMap, SeatMapBuilder};
pub use neighbor::{Env8Neighbors, NeighborCounter, Sight8Neighbors};
pub use sim::{
    next_generation, run_to_fixed_point, run_to_fixed_point_within, step, Generation, SeatRule,
};

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidSeatChar(char),
    InconsistentSeatMapRow(usize, usize), // (element count of current row, expect count of elements in earlier row).
    EmptySeatMap,
    OutOfBounds(Position, usize, usize), // (position, row count, column count).
    NotStabilized(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InvalidSeatChar(c) => write!(f, "Invalid character({}) for seat", c),
            Error::InconsistentSeatMapRow(cur_count, expect_count) => write!(
                f,
                "Given row({} elements), expect row which have {} elements.",
                cur_count, expect_count
            ),
            Error::EmptySeatMap => write!(f, "Given seat map is empty, expect at least one row and one column."),
            Error::OutOfBounds(pos, row_n, col_n) => write!(
                f,
                "Position {} is outside of seat map({} rows, {} columns).",
                pos, row_n, col_n
            ),
            Error::NotStabilized(max_gen_n) => write!(
                f,
                "Seat map doesn't stabilize within {} generation(s).",
                max_gen_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Give up if seats keep changing after this many generations.
    #[arg(long)]
    pub max_generations: Option<usize>,
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

pub fn read_seat_map<P: AsRef<Path>>(path: P) -> Result<SeatMap> {
    let file = File::open(path).map_err(Error::IOError)?;
    let reader = BufReader::new(file);
    let mut builder = SeatMapBuilder::new();
    let mut blank_n = 0;
    for (ind, l) in reader.lines().enumerate() {
        let s = l.map_err(Error::IOError)?;
        let row = s.trim_end_matches('\r');
        // Blank lines are allowed after the layout only.
        if row.is_empty() {
            blank_n += 1;
            continue;
        }
        if blank_n > 0 {
            bail!("Found {} blank line(s) before line {}.", blank_n, ind + 1);
        }
        builder
            .add_row(row)
            .with_context(|| format!("Failed to read seats in line {}.", ind + 1))?;
    }

    Ok(builder.build()?)
}

/// Runs `rule` on `seat_map`, bounded by `max_generations` if it's given.
pub fn stabilize<C>(
    seat_map: SeatMap,
    rule: &SeatRule<C>,
    max_generations: Option<usize>,
) -> Result<(SeatMap, usize)>
where
    C: NeighborCounter + Sync,
{
    Ok(match max_generations {
        Some(max_gen_n) => run_to_fixed_point_within(seat_map, rule, max_gen_n)?,
        None => run_to_fixed_point(seat_map, rule),
    })
}
