/// The 8 winning index triples, row-major on the 3x3 grid.
/// Order matters: `evaluate` reports the first satisfied line in this order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

/// Outcome of scanning the board: exactly one of the three.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Win { mark: Mark, line: [usize; 3] },
    Draw,
    InProgress,
}

/// 9 cells, indices 0-8 row-major. A non-empty cell never reverts to empty
/// except through `reset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; 9],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; 9],
        }
    }

    #[cfg(test)]
    pub fn from_marks(cells: [Mark; 9]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Stores `mark` at `index` only if the cell exists and is empty.
    /// Returns `false` and leaves the board unchanged otherwise.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }
        match self.cells.get(index) {
            Some(Mark::Empty) => {
                self.cells[index] = mark;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; 9];
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Empty cell indices in increasing order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Win takes priority over draw; the first satisfied line in
    /// `WIN_LINES` order is the one reported.
    pub fn evaluate(&self) -> Verdict {
        for line in WIN_LINES {
            let [a, b, c] = line;
            let mark = self.cells[a];
            if mark != Mark::Empty && mark == self.cells[b] && mark == self.cells[c] {
                return Verdict::Win { mark, line };
            }
        }

        if self.is_full() {
            Verdict::Draw
        } else {
            Verdict::InProgress
        }
    }
}
