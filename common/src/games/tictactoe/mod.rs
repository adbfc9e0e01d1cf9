mod board;
mod bot_controller;
mod game_state;
mod input;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, DRAW_SCORE, LOSS_SCORE, SearchOutcome, SearchStats, WIN_SCORE, calculate_move,
};
pub use game_state::TicTacToeGameState;
pub use input::{INVALID_INPUT_MESSAGE, MoveInputError, parse_move};
pub use session::{BotPlayer, ConsoleGame, ConsoleIo, GameError, GameOutcome, HumanPlayer, Player};
pub use types::{BOARD_SIZE, FirstPlayerMode, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{all_lines, check_win, check_win_with_line};
