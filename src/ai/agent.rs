use crate::error::{AgentError, ConfigError, SearchError};
use crate::game::{GameOutcome, GameState, MoveError, Player};

use super::search::SearchConfig;
use super::selector::MoveSelector;

/// Anything that can pick a column for the side to move.
pub trait Agent {
    /// Select an action (column) given the current game state.
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Searching opponent. Plays whichever side is to move in the state it is
/// handed.
pub struct MinimaxAgent {
    config: SearchConfig,
    red: MoveSelector,
    yellow: MoveSelector,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Ok(MinimaxAgent {
            config,
            red: MoveSelector::new(Player::Red, config)?,
            yellow: MoveSelector::new(Player::Yellow, config)?,
        })
    }

    pub fn with_depth(depth: u32) -> Result<Self, ConfigError> {
        MinimaxAgent::new(SearchConfig {
            depth,
            ..SearchConfig::default()
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn selector(&mut self, player: Player) -> &mut MoveSelector {
        match player {
            Player::Red => &mut self.red,
            Player::Yellow => &mut self.yellow,
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        if state.is_terminal() {
            return Err(SearchError::NoLegalMove.into());
        }
        let col = self
            .selector(state.current_player())
            .choose_move(state.board())?;
        Ok(col)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Errors from driving a game between two agents.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("{agent} could not move: {source}")]
    NoMove { agent: String, source: AgentError },

    #[error("{agent} played an illegal move: {source}")]
    IllegalMove { agent: String, source: MoveError },
}

/// Play `state` out to the end, `red` and `yellow` moving for their sides.
pub fn play_game(
    mut state: GameState,
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
) -> Result<(GameOutcome, GameState), PlayError> {
    loop {
        if let Some(outcome) = state.outcome() {
            return Ok((outcome, state));
        }
        let agent: &mut dyn Agent = match state.current_player() {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let col = agent.select_action(&state).map_err(|source| PlayError::NoMove {
            agent: agent.name().to_string(),
            source,
        })?;
        state
            .apply_move_mut(col)
            .map_err(|source| PlayError::IllegalMove {
                agent: agent.name().to_string(),
                source,
            })?;
    }
}
