use serde::Serialize;

/// A valid board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// Per-player group sizes, largest group first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub black: Vec<u32>,
    pub white: Vec<u32>,
}

/// Public sketch state returned from WASM APIs after every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SketchState {
    /// Row-major `side * side` grid: 0=empty, 1=black, 2=white.
    /// Cells outside the hexagon are always 0.
    pub cells: Vec<u8>,
    pub side: u32,
    pub black_score: Vec<u32>,
    pub white_score: Vec<u32>,
    pub black_count: u32,
    pub white_count: u32,
}
