use super::board::Board;
use super::types::{BOARD_SIZE, Mark, Position};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveInputError {
    WrongLength(usize),
    NotAlphanumeric,
    OutOfRange,
    Occupied(Position),
}

impl std::fmt::Display for MoveInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveInputError::WrongLength(len) => {
                write!(f, "expected 2 characters, got {}", len)
            }
            MoveInputError::NotAlphanumeric => {
                write!(f, "expected a column letter followed by a row digit")
            }
            MoveInputError::OutOfRange => write!(f, "column or row is off the board"),
            MoveInputError::Occupied(pos) => write!(f, "cell {} is already marked", pos),
        }
    }
}

impl std::error::Error for MoveInputError {}

/// Parses a token such as `a1` or `C3` into a blank cell of `board`.
/// Only the line ending is stripped; surrounding spaces count as characters.
pub fn parse_move(token: &str, board: &Board) -> Result<Position, MoveInputError> {
    let token = token.trim_end_matches(['\r', '\n']).to_lowercase();
    let chars: Vec<char> = token.chars().collect();

    let [column, row] = chars[..] else {
        return Err(MoveInputError::WrongLength(chars.len()));
    };

    if !column.is_alphabetic() || !row.is_numeric() {
        return Err(MoveInputError::NotAlphanumeric);
    }

    let x = (column as u32).wrapping_sub('a' as u32) as usize;
    let y = match row.to_digit(10) {
        Some(digit) if digit >= 1 => digit as usize - 1,
        _ => return Err(MoveInputError::OutOfRange),
    };

    if x >= BOARD_SIZE || y >= BOARD_SIZE {
        return Err(MoveInputError::OutOfRange);
    }

    let pos = Position::new(x, y);
    if board.get(pos) != Mark::Empty {
        return Err(MoveInputError::Occupied(pos));
    }

    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tokens() {
        let board = Board::new();
        assert_eq!(parse_move("a1", &board), Ok(Position::new(0, 0)));
        assert_eq!(parse_move("c1", &board), Ok(Position::new(2, 0)));
        assert_eq!(parse_move("b3", &board), Ok(Position::new(1, 2)));
        assert_eq!(parse_move("C2", &board), Ok(Position::new(2, 1)));
        assert_eq!(parse_move("a3\n", &board), Ok(Position::new(0, 2)));
        assert_eq!(parse_move("B1\r\n", &board), Ok(Position::new(1, 0)));
    }

    #[test]
    fn test_every_cell_round_trips_through_display() {
        let board = Board::new();
        for pos in board.available_moves() {
            assert_eq!(parse_move(&pos.to_string(), &board), Ok(pos));
        }
    }

    #[test]
    fn test_wrong_length() {
        let board = Board::new();
        assert_eq!(parse_move("", &board), Err(MoveInputError::WrongLength(0)));
        assert_eq!(parse_move("a", &board), Err(MoveInputError::WrongLength(1)));
        assert_eq!(parse_move("a12", &board), Err(MoveInputError::WrongLength(3)));
    }

    #[test]
    fn test_surrounding_whitespace_is_not_stripped() {
        let board = Board::new();
        assert_eq!(parse_move(" a1\n", &board), Err(MoveInputError::WrongLength(3)));
        assert_eq!(parse_move("a1 \n", &board), Err(MoveInputError::WrongLength(3)));
        assert_eq!(parse_move("\ta1", &board), Err(MoveInputError::WrongLength(3)));
        assert_eq!(parse_move("a 1", &board), Err(MoveInputError::WrongLength(3)));
        assert_eq!(parse_move("\n", &board), Err(MoveInputError::WrongLength(0)));
    }

    #[test]
    fn test_not_alphanumeric() {
        let board = Board::new();
        assert_eq!(parse_move("1a", &board), Err(MoveInputError::NotAlphanumeric));
        assert_eq!(parse_move("ab", &board), Err(MoveInputError::NotAlphanumeric));
        assert_eq!(parse_move("?1", &board), Err(MoveInputError::NotAlphanumeric));
    }

    #[test]
    fn test_out_of_range() {
        let board = Board::new();
        assert_eq!(parse_move("d1", &board), Err(MoveInputError::OutOfRange));
        assert_eq!(parse_move("a4", &board), Err(MoveInputError::OutOfRange));
        assert_eq!(parse_move("a0", &board), Err(MoveInputError::OutOfRange));
        assert_eq!(parse_move("z9", &board), Err(MoveInputError::OutOfRange));
    }

    #[test]
    fn test_occupied_cell() {
        let board = Board::from_rows(["X..", "...", "..."]);
        assert_eq!(
            parse_move("a1", &board),
            Err(MoveInputError::Occupied(Position::new(0, 0)))
        );
        assert_eq!(parse_move("b1", &board), Ok(Position::new(1, 0)));
    }
}
