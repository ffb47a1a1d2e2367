pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A single cell position. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Self {
        Location { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Row a piece dropped in `col` would land in, scanning from the bottom.
    /// `None` when the column is full or out of range.
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        match self.drop_row(col) {
            Some(row) => {
                self.cells[row][col] = cell;
                Ok(row)
            }
            None => Err(MoveError::ColumnFull),
        }
    }

    /// Copy-on-write drop: returns the resulting board and the landing cell,
    /// leaving `self` untouched.
    pub fn with_drop(&self, col: usize, cell: Cell) -> Result<(Board, Location), MoveError> {
        let mut next = *self;
        let row = next.drop_piece(col, cell)?;
        Ok((next, Location::new(row, col)))
    }

    /// Copy of this board with one cell overwritten. Simulation primitive for
    /// the strategies, which already know the landing cell from the move
    /// generator; equivalent to `with_drop` on that column.
    pub(crate) fn with_cell(&self, loc: Location, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[loc.row][loc.col] = cell;
        next
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// All cells connected to (row, col) holding the same color along the
    /// (dr, dc) axis, both directions, in position order. Empty start cell
    /// yields an empty run.
    pub fn connected_run(&self, row: usize, col: usize, dr: i32, dc: i32) -> Vec<Location> {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return Vec::new();
        }

        let mut run = Vec::new();

        // Walk backwards first so the run comes out in position order.
        let mut r = row as i32 - dr;
        let mut c = col as i32 - dc;
        while in_bounds(r, c) && self.cells[r as usize][c as usize] == cell {
            run.push(Location::new(r as usize, c as usize));
            r -= dr;
            c -= dc;
        }
        run.reverse();

        run.push(Location::new(row, col));

        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while in_bounds(r, c) && self.cells[r as usize][c as usize] == cell {
            run.push(Location::new(r as usize, c as usize));
            r += dr;
            c += dc;
        }

        run
    }

    /// Check if the piece at (row, col) completes four-in-a-row on any axis.
    /// Only the placed cell needs testing: a drop elsewhere cannot change a
    /// pre-existing board's win status.
    pub fn is_winning_placement(&self, row: usize, col: usize) -> bool {
        const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        AXES.iter()
            .any(|&(dr, dc)| self.connected_run(row, col, dr, dc).len() >= 4)
    }

    /// Locate a winning line anywhere on the board: the color and its first
    /// four cells, scanning row-major with axes ordered horizontal, vertical,
    /// diagonal down-right, diagonal down-left.
    pub fn winning_run(&self) -> Option<(Cell, [Location; 4])> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = self.cells[row][col];
                if cell == Cell::Empty {
                    continue;
                }

                if col + 3 < COLS && (1..4).all(|i| self.cells[row][col + i] == cell) {
                    return Some((cell, line_from(row, col, 0, 1)));
                }
                if row + 3 < ROWS && (1..4).all(|i| self.cells[row + i][col] == cell) {
                    return Some((cell, line_from(row, col, 1, 0)));
                }
                if row + 3 < ROWS
                    && col + 3 < COLS
                    && (1..4).all(|i| self.cells[row + i][col + i] == cell)
                {
                    return Some((cell, line_from(row, col, 1, 1)));
                }
                if row + 3 < ROWS
                    && col >= 3
                    && (1..4).all(|i| self.cells[row + i][col - i] == cell)
                {
                    return Some((cell, line_from(row, col, 1, -1)));
                }
            }
        }
        None
    }

    /// A board is terminal when some color has four-in-a-row, or every column
    /// is full (draw).
    pub fn is_terminal(&self) -> bool {
        self.winning_run().is_some() || self.is_full()
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    row >= 0 && row < ROWS as i32 && col >= 0 && col < COLS as i32
}

fn line_from(row: usize, col: usize, dr: i32, dc: i32) -> [Location; 4] {
    std::array::from_fn(|i| {
        Location::new(
            (row as i32 + dr * i as i32) as usize,
            (col as i32 + dc * i as i32) as usize,
        )
    })
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
