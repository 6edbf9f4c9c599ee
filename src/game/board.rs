use super::PlayerIndex;
use crate::error::GameError;

/// Number of same-player cells in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// Line directions scanned from every anchor cell, as (row, column) steps:
/// horizontal-right, vertical-down, diagonal-down-right, diagonal-down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerIndex),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

/// Grid of cell occupancy. Row 0 is the top; pieces settle toward
/// `height - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        check_dimensions(height, width)?;
        Ok(Board {
            height,
            width,
            cells: vec![vec![Cell::Empty; width]; height],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position. Coordinates off the board read
    /// as empty.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(Cell::Empty)
    }

    /// Row a piece dropped into `column` would land on, or `None` if the
    /// column is full.
    pub fn landing_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        self.check_column(column)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row][column] == Cell::Empty))
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= self.width || self.cells[0][column] != Cell::Empty
    }

    /// Mark a cell as occupied by `player`.
    ///
    /// The row should come from [`Board::landing_row`] for the same column;
    /// gravity is not re-checked here, only that the cell is free.
    pub fn place(
        &mut self,
        row: usize,
        column: usize,
        player: PlayerIndex,
    ) -> Result<(), GameError> {
        self.check_column(column)?;
        if row >= self.height {
            return Err(GameError::InvalidRow {
                row,
                height: self.height,
            });
        }
        if self.cells[row][column] != Cell::Empty {
            return Err(GameError::CellOccupied { row, column });
        }
        self.cells[row][column] = Cell::Occupied(player);
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|column| self.is_column_full(column))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Find a line of [`WIN_LENGTH`] cells all held by `player`, anywhere on
    /// the board.
    ///
    /// Anchors are visited row by row, left to right, and each anchor tries
    /// the directions in [`DIRECTIONS`] order; the first complete line wins.
    pub fn winning_line(&self, player: PlayerIndex) -> Option<[Position; WIN_LENGTH]> {
        let target = Cell::Occupied(player);
        for row in 0..self.height {
            for column in 0..self.width {
                for &(d_row, d_col) in &DIRECTIONS {
                    let Some(line) = self.line_from(row, column, d_row, d_col) else {
                        continue;
                    };
                    if line.iter().all(|p| self.cells[p.row][p.column] == target) {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    /// The in-bounds line starting at (row, column), or `None` if any cell
    /// falls off the board.
    fn line_from(
        &self,
        row: usize,
        column: usize,
        d_row: isize,
        d_col: isize,
    ) -> Option<[Position; WIN_LENGTH]> {
        let mut line = [Position::new(row, column); WIN_LENGTH];
        for (step, slot) in line.iter_mut().enumerate() {
            let step = step as isize;
            let r = row.checked_add_signed(d_row * step)?;
            let c = column.checked_add_signed(d_col * step)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *slot = Position::new(r, c);
        }
        Some(line)
    }

    fn check_column(&self, column: usize) -> Result<(), GameError> {
        if column >= self.width {
            return Err(GameError::InvalidColumn {
                column: isize::try_from(column).unwrap_or(isize::MAX),
                width: self.width,
            });
        }
        Ok(())
    }
}

/// Validate board dimensions without allocating a board.
pub fn check_dimensions(height: usize, width: usize) -> Result<(), GameError> {
    if height == 0 || width == 0 {
        return Err(GameError::InvalidDimensions { height, width });
    }
    Ok(())
}
