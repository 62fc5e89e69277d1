use crate::board::{Board, Owner};
use crate::score::compute_score;
use crate::shape::Shape;
use crate::types::{Position, Score, SketchState};

/// One sketching session: a board plus the currently selected paint
/// color. Owned by a single UI context; every call is synchronous, so a
/// paint fully applies before the next score query.
pub struct Sketch {
    board: Board,
    brush: Owner,
}

impl Sketch {
    pub fn new(radius: u8) -> Self {
        Self {
            board: Board::new(Shape::new(radius)),
            brush: Owner::Black,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn brush(&self) -> Owner {
        self.brush
    }

    /// Selects the paint color from the settings panel's selector string.
    pub fn set_brush(&mut self, name: &str) -> Result<(), String> {
        self.brush = Owner::parse(name).ok_or_else(|| format!("unknown player name: {name}"))?;
        Ok(())
    }

    /// Repaints one cell with the current brush.
    pub fn paint(&mut self, row: i32, col: i32) -> Result<(), String> {
        self.board
            .set_owner(row, col, self.brush)
            .map_err(|err| err.to_string())
    }

    pub fn score(&self) -> Score {
        compute_score(&self.board)
    }

    /// Display form of one player's score: group sizes joined with `-`
    /// (e.g. `"8-6-1-1"`), empty string for a player with no stones.
    pub fn score_line(&self, owner: Owner) -> String {
        let score = self.score();
        let sizes = match owner {
            Owner::Black => score.black,
            Owner::White => score.white,
            Owner::Empty => return String::new(),
        };
        sizes
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// The valid cells, for the render layer to lay out as hexes.
    pub fn cells(&self) -> Vec<Position> {
        self.board
            .shape()
            .cells()
            .map(|(row, col)| Position {
                row: row as u8,
                col: col as u8,
            })
            .collect()
    }

    pub fn snapshot(&self) -> SketchState {
        let score = self.score();
        let (black_count, white_count) = self.board.count();
        SketchState {
            cells: self.board.to_array(),
            side: self.board.shape().side() as u32,
            black_score: score.black,
            white_score: score.white,
            black_count,
            white_count,
        }
    }
}
