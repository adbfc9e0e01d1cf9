use std::io::{self, BufRead, Write};

use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::input::{INVALID_INPUT_MESSAGE, parse_move};
use super::types::{FirstPlayerMode, Mark, Position};
use crate::games::SessionRng;

#[derive(Debug)]
pub enum GameError {
    Io(io::Error),
    InputClosed,
    NoMoveAvailable,
    IllegalMove(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "IO error: {}", e),
            GameError::InputClosed => write!(f, "Input closed before the game finished"),
            GameError::NoMoveAvailable => write!(f, "No move available"),
            GameError::IllegalMove(reason) => write!(f, "Illegal move: {}", reason),
        }
    }
}

impl std::error::Error for GameError {}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Winner { mark: Mark, name: String },
    Draw,
}

pub struct ConsoleIo<'a> {
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
}

pub trait Player {
    fn name(&self) -> &str;

    fn make_move(
        &mut self,
        state: &TicTacToeGameState,
        io: &mut ConsoleIo<'_>,
    ) -> Result<Position, GameError>;

    fn print_win(&self, output: &mut dyn Write) -> io::Result<()> {
        writeln!(output, "Congratulations to Player {}!", self.name())
    }
}

pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_move(
        &mut self,
        state: &TicTacToeGameState,
        io: &mut ConsoleIo<'_>,
    ) -> Result<Position, GameError> {
        loop {
            write!(io.output, "Make your step, Player {} (Example: a1): ", self.name)?;
            io.output.flush()?;

            let mut line = String::new();
            if io.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }

            match parse_move(&line, &state.board) {
                Ok(pos) => return Ok(pos),
                Err(e) => {
                    crate::log!("Player {} entered {:?}: {}", self.name, line.trim(), e);
                    writeln!(io.output, "{}", INVALID_INPUT_MESSAGE)?;
                }
            }
        }
    }
}

pub struct BotPlayer {
    name: String,
}

impl BotPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for BotPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_move(
        &mut self,
        state: &TicTacToeGameState,
        io: &mut ConsoleIo<'_>,
    ) -> Result<Position, GameError> {
        let outcome =
            calculate_move(&BotInput::from_game_state(state)).ok_or(GameError::NoMoveAvailable)?;

        crate::log!(
            "Bot {} chose {} (score {}, {} nodes, {} leaves)",
            self.name,
            outcome.position,
            outcome.score,
            outcome.stats.nodes,
            outcome.stats.leaves
        );
        writeln!(io.output, "Player {} plays {}", self.name, outcome.position)?;

        Ok(outcome.position)
    }
}

/// Two seated players; the first one plays X and moves first.
pub struct ConsoleGame {
    state: TicTacToeGameState,
    players: [Box<dyn Player>; 2],
}

impl ConsoleGame {
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            players: [first, second],
        }
    }

    pub fn human_vs_bot(
        human_name: &str,
        bot_name: &str,
        first_player_mode: FirstPlayerMode,
        rng: &mut SessionRng,
    ) -> Self {
        let human: Box<dyn Player> = Box::new(HumanPlayer::new(human_name));
        let bot: Box<dyn Player> = Box::new(BotPlayer::new(bot_name));

        let human_first = match first_player_mode {
            FirstPlayerMode::Human => true,
            FirstPlayerMode::Bot => false,
            FirstPlayerMode::Random => rng.random_bool(),
        };

        if human_first {
            Self::new(human, bot)
        } else {
            Self::new(bot, human)
        }
    }

    pub fn player_name(&self, mark: Mark) -> Option<&str> {
        match mark {
            Mark::X => Some(self.players[0].name()),
            Mark::O => Some(self.players[1].name()),
            Mark::Empty => None,
        }
    }

    pub fn play<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<GameOutcome, GameError> {
        let mut io = ConsoleIo { input, output };

        crate::log!(
            "Game started: Player {} plays X, Player {} plays O",
            self.players[0].name(),
            self.players[1].name()
        );

        while !self.state.board.is_full() {
            write!(io.output, "{}", self.state.board)?;

            let mark = self.state.current_mark;
            let player = match mark {
                Mark::X => &mut self.players[0],
                _ => &mut self.players[1],
            };

            let pos = player.make_move(&self.state, &mut io)?;
            self.state.place_mark(pos).map_err(GameError::IllegalMove)?;
            crate::log!("Player {} placed {} at {}", player.name(), mark, pos);

            if let Some(winner) = self.state.status.winner() {
                write!(io.output, "{}", self.state.board)?;
                player.print_win(io.output)?;
                crate::log!("Game over: Player {} won", player.name());
                return Ok(GameOutcome::Winner {
                    mark: winner,
                    name: player.name().to_string(),
                });
            }
        }

        write!(io.output, "{}", self.state.board)?;
        writeln!(io.output, "Oh, it's a draw")?;
        crate::log!("Game over: draw");
        Ok(GameOutcome::Draw)
    }
}
