//! The N×N board and the five-in-a-row detector.

use goban_protocol::Stone;

use crate::GameError;

/// The four axes through a played cell: horizontal, vertical, and the
/// two diagonals. Each axis is checked independently; a win on any one
/// is sufficient.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// How many consecutive stones complete a win. Exactly five is enough.
pub(crate) const WIN_RUN: usize = 5;

/// A fixed-size square grid of cells.
///
/// A cell, once occupied, never reverts to empty except through
/// [`Board::reset`]. The size is fixed at construction; the server's
/// authoritative default is 19.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Stone>>,
}

impl Board {
    /// Creates an empty `size` × `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Returns the board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at (`row`, `col`), or `None` for out-of-bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Stone> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// Places `stone` at (`row`, `col`). Mutates exactly one cell.
    ///
    /// # Errors
    /// `OutOfBounds` if the coordinates fall outside `[0, size)`;
    /// `CellOccupied` if the target already holds a stone. Either way
    /// the board is untouched.
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        stone: Stone,
    ) -> Result<(), GameError> {
        if row >= self.size || col >= self.size {
            return Err(GameError::OutOfBounds { row, col });
        }
        let cell = &mut self.cells[row * self.size + col];
        if cell.is_some() {
            return Err(GameError::CellOccupied { row, col });
        }
        *cell = Some(stone);
        Ok(())
    }

    /// Returns `true` if the stone just played at (`row`, `col`)
    /// completed a run of at least five.
    ///
    /// For each axis the run length is `1 + run(+d) + run(-d)`: the two
    /// half-scans start one step away from the played cell, so the cell
    /// itself is counted exactly once per axis. Each half-scan stops at
    /// the first empty or opposing cell, or at the board edge — no
    /// wrap-around, no counting past a mismatch.
    pub fn is_winning_move(&self, row: usize, col: usize, stone: Stone) -> bool {
        AXES.iter().any(|&(dr, dc)| {
            1 + self.run(row, col, dr, dc, stone)
                + self.run(row, col, -dr, -dc, stone)
                >= WIN_RUN
        })
    }

    /// Counts consecutive `stone` cells along (`dr`, `dc`), starting one
    /// step away from (`row`, `col`). Pure: no shared counters between
    /// direction scans.
    fn run(&self, row: usize, col: usize, dr: isize, dc: isize, stone: Stone) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row as isize + dr, col as isize + dc);
        let size = self.size as isize;
        while r >= 0 && r < size && c >= 0 && c < size {
            if self.cells[(r * size + c) as usize] != Some(stone) {
                break;
            }
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Sets every cell back to empty.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}
