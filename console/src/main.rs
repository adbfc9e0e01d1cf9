mod config;
mod startup;

use std::io;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::tictactoe::{ConsoleGame, FirstPlayerMode};
use common::log;
use common::logger::{self, LogTarget};

use config::get_config_path;
use startup::{ConfigSource, Startup};

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against an unbeatable bot")]
struct Args {
    /// Path to the YAML config, created with defaults when missing.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides `players.first_player` from the config.
    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Bot,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Bot => FirstPlayerMode::Bot,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = args.config.unwrap_or_else(get_config_path);
    let Startup {
        config,
        config_source,
        log_target,
        warnings,
    } = startup::prepare(&config_path)?;

    let logs_to_stderr = matches!(log_target, LogTarget::Stderr);
    let prefix = if args.use_log_prefix || config.logging.use_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, log_target);

    for warning in &warnings {
        if !logs_to_stderr {
            eprintln!("Warning: {}", warning);
        }
        log!("Warning: {}", warning);
    }

    match config_source {
        ConfigSource::Loaded => log!("Loaded config from {}", config_path),
        ConfigSource::Created => log!("Wrote default config to {}", config_path),
        ConfigSource::Fallback => log!("Playing with default config"),
    }

    let first_player_mode = args
        .first_player
        .map(FirstPlayerMode::from)
        .unwrap_or(config.players.first_player);

    let mut rng = SessionRng::from_random();
    log!("Session seed {}, first player mode {:?}", rng.seed(), first_player_mode);

    let mut game = ConsoleGame::human_vs_bot(
        &config.players.human_name,
        &config.players.bot_name,
        first_player_mode,
        &mut rng,
    );

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    game.play(&mut input, &mut output)?;

    Ok(())
}
