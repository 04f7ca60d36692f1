use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use minimax_connect_four::ai::{Agent, MinimaxAgent, RandomAgent};
use minimax_connect_four::config::{AppConfig, Opponent, MAX_DEPTH};
use minimax_connect_four::error::AgentError;
use minimax_connect_four::game::{GameOutcome, GameState, COLS};

/// Play Connect Four against an alpha-beta minimax opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Let the engine make the first move
    #[arg(long)]
    engine_first: bool,

    /// Watch the engine play against itself
    #[arg(long, conflicts_with = "random_opponent")]
    self_play: bool,

    /// Pit the engine against uniformly random moves
    #[arg(long)]
    random_opponent: bool,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

/// Reads 1-based column numbers from stdin.
struct HumanAgent<R> {
    input: R,
}

impl<R: BufRead> HumanAgent<R> {
    fn read_column(&mut self, state: &GameState) -> io::Result<Option<usize>> {
        let legal = state.legal_actions();
        loop {
            print!("{} to move, column (1-{COLS}): ", state.current_player().name());
            io::stdout().flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=COLS).contains(&n) && legal.contains(&(n - 1)) => {
                    return Ok(Some(n - 1))
                }
                _ => println!("'{}' is not a playable column", line.trim()),
            }
        }
    }
}

impl<R: BufRead> Agent for HumanAgent<R> {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        self.read_column(state)?.ok_or(AgentError::InputClosed)
    }

    fn name(&self) -> &str {
        "Human"
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        if depth > MAX_DEPTH {
            bail!("depth {depth} exceeds the maximum of {MAX_DEPTH}");
        }
        config.search.depth = depth;
    }
    if cli.engine_first {
        config.play.first_player = config.play.engine_player;
    }
    if cli.self_play {
        config.play.opponent = Opponent::Engine;
    } else if cli.random_opponent {
        config.play.opponent = Opponent::Random;
    }
    if cli.seed.is_some() {
        config.play.seed = cli.seed;
    }
    config.validate().context("invalid configuration")?;

    if cli.print_config {
        print!(
            "{}",
            toml::to_string_pretty(&config).context("serializing configuration")?
        );
        return Ok(());
    }

    let engine_side = config.play.engine_player;
    let mut engine = MinimaxAgent::new(config.search).context("building engine")?;
    let mut opponent: Box<dyn Agent> = match config.play.opponent {
        Opponent::Human => Box::new(HumanAgent {
            input: io::stdin().lock(),
        }),
        Opponent::Random => Box::new(match config.play.seed {
            Some(seed) => RandomAgent::seeded(seed),
            None => RandomAgent::new(),
        }),
        Opponent::Engine => {
            Box::new(MinimaxAgent::new(config.search).context("building opponent engine")?)
        }
    };

    info!(
        "{} engine (depth {}) vs {} {}, {} moves first",
        engine_side.name(),
        config.search.depth,
        engine_side.other().name(),
        opponent.name(),
        config.play.first_player.name()
    );

    let mut state = GameState::initial(config.play.first_player);
    println!("{}", state.board());

    while !state.is_terminal() {
        let mover = state.current_player();
        let agent: &mut dyn Agent = if mover == engine_side {
            &mut engine
        } else {
            opponent.as_mut()
        };

        let col = match agent.select_action(&state) {
            Ok(col) => col,
            Err(AgentError::InputClosed) => {
                println!("Goodbye.");
                return Ok(());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("{} ({}) failed to move", agent.name(), mover.name()))
            }
        };
        state
            .apply_move_mut(col)
            .with_context(|| format!("{} played column {}", agent.name(), col + 1))?;

        println!("{} ({}) plays column {}", mover.name(), agent.name(), col + 1);
        println!("{}", state.board());
    }

    match state.outcome() {
        Some(GameOutcome::Winner(player)) if player == engine_side => {
            println!("{} (engine) wins.", player.name())
        }
        Some(GameOutcome::Winner(player)) => println!("{} wins.", player.name()),
        Some(GameOutcome::Draw) => println!("Draw: the board is full."),
        None => {}
    }

    Ok(())
}
