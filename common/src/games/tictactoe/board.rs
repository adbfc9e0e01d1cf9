use std::fmt;

use super::types::{BOARD_SIZE, Mark, Position};
use super::win_detector::check_win;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from three row strings using `X`, `O` and any other
    /// character for a blank cell.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(BOARD_SIZE).enumerate() {
                board.cells[y][x] = match ch {
                    'X' | 'x' => Mark::X,
                    'O' | 'o' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }

    /// `pos` must be on the board; use `place` for unchecked positions.
    pub fn get(&self, pos: Position) -> Mark {
        debug_assert!(pos.is_on_board(), "position {:?} is off the board", pos);
        self.cells[pos.y][pos.x]
    }

    /// Overwrites the cell without checks. `pos` must be on the board.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        debug_assert!(pos.is_on_board(), "position {:?} is off the board", pos);
        self.cells[pos.y][pos.x] = mark;
    }

    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), String> {
        if !pos.is_on_board() {
            return Err("Position out of bounds".to_string());
        }
        if self.get(pos) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }
        self.set(pos, mark);
        Ok(())
    }

    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Mark::Empty);
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(self)
    }

    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    pub fn marks_placed(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(x, y));
                }
            }
        }
        moves
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c")?;
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f, "  -----")?;
            }
            let line: Vec<String> = row.iter().map(|mark| mark.to_string()).collect();
            writeln!(f, "{} {}", y + 1, line.join("|"))?;
        }
        Ok(())
    }
}
