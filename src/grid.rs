use std::{fmt::Display, str::FromStr};

use crate::{cell::Cell, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        static ALL_DIRS: [Direction; 8] = [
            Direction::TopLeft,
            Direction::Top,
            Direction::TopRight,
            Direction::Left,
            Direction::Right,
            Direction::BottomLeft,
            Direction::Bottom,
            Direction::BottomRight,
        ];

        &ALL_DIRS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    /// The next position one step along `dir`, or `None` when that step
    /// would leave the top or left edge. The bottom and right edges depend on
    /// the map, so they are checked by `SeatMap::cell`.
    pub fn along_dir(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::TopLeft if self.r > 0 && self.c > 0 => {
                Some(Position::new(self.r - 1, self.c - 1))
            }
            Direction::Top if self.r > 0 => Some(Position::new(self.r - 1, self.c)),
            Direction::TopRight if self.r > 0 => Some(Position::new(self.r - 1, self.c + 1)),
            Direction::Left if self.c > 0 => Some(Position::new(self.r, self.c - 1)),
            Direction::Right => Some(Position::new(self.r, self.c + 1)),
            Direction::BottomLeft if self.c > 0 => Some(Position::new(self.r + 1, self.c - 1)),
            Direction::Bottom => Some(Position::new(self.r + 1, self.c)),
            Direction::BottomRight => Some(Position::new(self.r + 1, self.c + 1)),
            _ => None,
        }
    }
}

/// A cell together with its map and a position that is known to be inside
/// that map. Only `SeatMap::locate` and the map's own traversal hand these
/// out.
#[derive(Debug, Clone, Copy)]
pub struct CellRef<'a> {
    map: &'a SeatMap,
    pos: Position,
    cell: Cell,
}

impl<'a> CellRef<'a> {
    pub fn map(&self) -> &'a SeatMap {
        self.map
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }
}

/// One generation of the seat layout.
///
/// A map never changes after it's built, the next generation is always a new
/// map. Two maps are equal only if they have the same size and every cell
/// matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: usize,
}

impl SeatMap {
    pub fn from_rows<I, S>(rows: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = SeatMapBuilder::new();
        for row in rows {
            builder.add_row(row.as_ref())?;
        }

        builder.build()
    }

    // Callers guarantee `cells.len() == row_n * col_n`.
    pub(crate) fn from_cells(cells: Vec<Cell>, row_n: usize, col_n: usize) -> Self {
        debug_assert_eq!(cells.len(), row_n * col_n);
        Self {
            cells,
            row_n,
            col_n,
        }
    }

    pub fn width(&self) -> usize {
        self.col_n
    }

    pub fn height(&self) -> usize {
        self.row_n
    }

    pub fn cell_at(&self, pos: &Position) -> Result<Cell, Error> {
        self.cell(pos)
            .ok_or(Error::OutOfBounds(*pos, self.row_n, self.col_n))
    }

    pub fn locate(&self, pos: &Position) -> Result<CellRef<'_>, Error> {
        let cell = self.cell_at(pos)?;
        Ok(CellRef {
            map: self,
            pos: *pos,
            cell,
        })
    }

    pub fn cell(&self, pos: &Position) -> Option<Cell> {
        self.pos_to_ind(pos).map(|ind| self.cells[ind])
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    pub fn seat_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_seat()).count()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let col_n = self.col_n;
        (0..self.row_n).flat_map(move |r| (0..col_n).map(move |c| Position::new(r, c)))
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // `ind` comes from enumerating `cells`, so it's always inside.
    pub(crate) fn cell_ref(&self, ind: usize) -> CellRef<'_> {
        CellRef {
            map: self,
            pos: Position::new(ind / self.col_n, ind % self.col_n),
            cell: self.cells[ind],
        }
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r >= self.row_n || pos.c >= self.col_n {
            None
        } else {
            Some(pos.r * self.col_n + pos.c)
        }
    }
}

impl Display for SeatMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.chunks(self.col_n).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }

        Ok(())
    }
}

impl FromStr for SeatMap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.lines().collect::<Vec<_>>();
        let end = rows
            .iter()
            .rposition(|row| !row.is_empty())
            .map_or(0, |ind| ind + 1);

        Self::from_rows(&rows[..end])
    }
}

pub struct SeatMapBuilder {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: Option<usize>,
}

impl Default for SeatMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatMapBuilder {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, row_text: &str) -> Result<(), Error> {
        let cell_n = row_text.chars().count();
        let expect_n = *self.col_n.get_or_insert(cell_n);
        if expect_n != cell_n {
            return Err(Error::InconsistentSeatMapRow(cell_n, expect_n));
        }

        for c in row_text.chars() {
            self.cells.push(Cell::try_from(c)?);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<SeatMap, Error> {
        match self.col_n {
            Some(col_n) if col_n > 0 && self.row_n > 0 => {
                Ok(SeatMap::from_cells(self.cells, self.row_n, col_n))
            }
            _ => Err(Error::EmptySeatMap),
        }
    }
}
