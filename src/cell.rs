use std::fmt::Display;

use crate::Error;

/// One position of the seat layout.
///
/// Floor never changes. A seat keeps being a seat, only its occupancy flips
/// between generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Seat(bool), // Is occupied?
}

impl Cell {
    pub const EMPTY: Cell = Cell::Seat(false);
    pub const OCCUPIED: Cell = Cell::Seat(true);

    pub fn is_seat(&self) -> bool {
        matches!(self, Cell::Seat(_))
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Seat(true))
    }
}

impl TryFrom<char> for Cell {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Cell::Floor),
            'L' => Ok(Cell::EMPTY),
            '#' => Ok(Cell::OCCUPIED),
            other => Err(Error::InvalidSeatChar(other)),
        }
    }
}

impl From<Cell> for char {
    fn from(value: Cell) -> Self {
        match value {
            Cell::Floor => '.',
            Cell::Seat(false) => 'L',
            Cell::Seat(true) => '#',
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
