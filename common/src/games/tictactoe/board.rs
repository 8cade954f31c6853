use super::types::{BOARD_SIZE, Mark};

pub fn get_available_moves(board: &[Mark; BOARD_SIZE]) -> Vec<usize> {
    let mut moves = Vec::new();
    for (index, &cell) in board.iter().enumerate() {
        if cell == Mark::Empty {
            moves.push(index);
        }
    }
    moves
}

/// Nine cells, row-major. A cell only ever goes from `Empty` to a mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_SIZE],
        }
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        if index >= BOARD_SIZE || mark == Mark::Empty {
            return false;
        }
        if self.cells[index] != Mark::Empty {
            return false;
        }
        self.cells[index] = mark;
        true
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; BOARD_SIZE];
    }

    pub fn snapshot(&self) -> [Mark; BOARD_SIZE] {
        self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Mark::Empty)
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }
}
