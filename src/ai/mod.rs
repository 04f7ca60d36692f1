//! The automated opponent: move ordering, static evaluation, alpha-beta
//! search, and the win/block/search move selector, plus agents that drive
//! whole games.

mod agent;
pub mod eval;
pub mod moves;
mod random;
pub mod search;
pub mod selector;

pub use agent::{play_game, Agent, MinimaxAgent, PlayError};
pub use eval::{EvalWeights, Heuristic, PositionalHeuristic};
pub use moves::{valid_moves, MOVE_ORDER};
pub use random::RandomAgent;
pub use search::{Search, SearchConfig, SearchStats};
pub use selector::{find_winning_move, Decision, MoveSelector, Reason};
