use thiserror::Error;

use crate::shape::Shape;

/// Cell ownership. Wire encoding: 0=empty, 1=black, 2=white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Owner {
    Black,
    White,
    #[default]
    Empty,
}

impl Owner {
    pub fn to_u8(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Black => 1,
            Self::White => 2,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            1 => Some(Self::Black),
            2 => Some(Self::White),
            _ => None,
        }
    }

    /// Parses the selector strings used by the settings panel.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "black" => Some(Self::Black),
            "white" => Some(Self::White),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Empty => "empty",
        }
    }
}

/// Coordinate rejected by the board's hexagonal mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell ({row}, {col}) is outside the hexagonal board")]
pub struct OutOfBounds {
    pub row: i32,
    pub col: i32,
}

/// Per-cell ownership over the valid cells of a hexagonal board.
///
/// A sketchpad, not a rule checker: any cell may be repainted from any
/// owner to any owner at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    shape: Shape,
    cells: Vec<Owner>,
}

impl Board {
    /// Creates a board with every valid cell empty.
    pub fn new(shape: Shape) -> Self {
        let side = shape.side();
        Self {
            shape,
            cells: vec![Owner::Empty; side * side],
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn owner(&self, row: i32, col: i32) -> Result<Owner, OutOfBounds> {
        self.check(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    /// Unconditionally repaints one cell. No legality check.
    pub fn set_owner(&mut self, row: i32, col: i32, owner: Owner) -> Result<(), OutOfBounds> {
        self.check(row, col)?;
        let index = self.index(row, col);
        self.cells[index] = owner;
        Ok(())
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u32, u32) {
        let mut black = 0;
        let mut white = 0;
        for &cell in &self.cells {
            match cell {
                Owner::Black => black += 1,
                Owner::White => white += 1,
                Owner::Empty => {}
            }
        }
        (black, white)
    }

    /// Row-major dump of the backing grid in the wire encoding.
    /// Invalid cells are always 0.
    pub fn to_array(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.to_u8()).collect()
    }

    fn check(&self, row: i32, col: i32) -> Result<(), OutOfBounds> {
        if self.shape.is_valid_cell(row, col) {
            Ok(())
        } else {
            Err(OutOfBounds { row, col })
        }
    }

    // Only valid after `check`.
    fn index(&self, row: i32, col: i32) -> usize {
        row as usize * self.shape.side() + col as usize
    }
}
