use super::board::Board;
use super::types::{BOARD_SIZE, Mark, Position, WinningLine};

const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

/// Every line of three cells: rows, then columns, then both diagonals.
pub fn all_lines() -> [[Position; BOARD_SIZE]; LINE_COUNT] {
    let mut lines = [[Position::new(0, 0); BOARD_SIZE]; LINE_COUNT];

    for i in 0..BOARD_SIZE {
        for j in 0..BOARD_SIZE {
            lines[i][j] = Position::new(j, i);
            lines[BOARD_SIZE + i][j] = Position::new(i, j);
        }
        lines[2 * BOARD_SIZE][i] = Position::new(i, i);
        lines[2 * BOARD_SIZE + 1][i] = Position::new(BOARD_SIZE - 1 - i, i);
    }

    lines
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in all_lines() {
        let mark = board.get(line[0]);
        if mark == Mark::Empty {
            continue;
        }

        if line.iter().all(|&pos| board.get(pos) == mark) {
            return Some(WinningLine::new(mark, line[0], line[BOARD_SIZE - 1]));
        }
    }

    None
}
