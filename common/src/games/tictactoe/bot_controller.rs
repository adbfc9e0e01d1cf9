use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::{Mark, Position};

pub const WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -1;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            current_mark: state.current_mark,
        }
    }
}

/// Counters for one search. The root board itself is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub position: Position,
    pub score: i32,
    pub stats: SearchStats,
}

/// Picks the move for `input.current_mark` by walking the entire remaining
/// game tree. Returns `None` when the game is already decided.
pub fn calculate_move(input: &BotInput) -> Option<SearchOutcome> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent()?;

    if input.board.is_terminal() {
        return None;
    }

    let mut search = Search {
        bot_mark,
        opponent_mark,
        stats: SearchStats::default(),
    };
    let mut board = input.board;

    let mut best: Option<(Position, i32)> = None;
    let mut immediate_win: Option<Position> = None;

    for pos in input.board.available_moves() {
        board.set(pos, bot_mark);
        let wins_now = board.winner() == Some(bot_mark);
        let score = search.minimax(&mut board, opponent_mark);
        board.clear(pos);

        if wins_now && immediate_win.is_none() {
            immediate_win = Some(pos);
        }
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    // An immediate win shares the top score with any slower forced win, so
    // it only changes which of the tied moves is returned.
    let (position, score) = match immediate_win {
        Some(pos) => (pos, WIN_SCORE),
        None => best?,
    };

    Some(SearchOutcome {
        position,
        score,
        stats: search.stats,
    })
}

struct Search {
    bot_mark: Mark,
    opponent_mark: Mark,
    stats: SearchStats,
}

impl Search {
    fn next_to_move(&self, mark: Mark) -> Mark {
        if mark == self.bot_mark {
            self.opponent_mark
        } else {
            self.bot_mark
        }
    }

    fn minimax(&mut self, board: &mut Board, to_move: Mark) -> i32 {
        self.stats.nodes += 1;

        if let Some(winner) = board.winner() {
            self.stats.leaves += 1;
            return if winner == self.bot_mark {
                WIN_SCORE
            } else {
                LOSS_SCORE
            };
        }

        if board.is_full() {
            self.stats.leaves += 1;
            return DRAW_SCORE;
        }

        let is_maximizing = to_move == self.bot_mark;
        let next = self.next_to_move(to_move);
        let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

        for pos in board.available_moves() {
            board.set(pos, to_move);
            let eval = self.minimax(board, next);
            board.clear(pos);

            best = if is_maximizing {
                best.max(eval)
            } else {
                best.min(eval)
            };
        }

        best
    }
}
