use log::{debug, trace};

use crate::error::{ConfigError, SearchError};
use crate::game::{Board, Player};

use super::moves::valid_moves;
use super::search::{Search, SearchConfig, SearchStats};

/// Why a column was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The move completes four in a row.
    Win,
    /// The opponent would complete four in a row there next turn.
    Block,
    /// Best root score from the tree search.
    Searched { score: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub reason: Reason,
}

/// Picks a column for `player`: take a win, else block a win, else search.
pub struct MoveSelector {
    config: SearchConfig,
    search: Search,
}

impl MoveSelector {
    /// Fails when `config` does not pass [`SearchConfig::validate`].
    pub fn new(player: Player, config: SearchConfig) -> Result<Self, ConfigError> {
        Ok(MoveSelector {
            search: Search::new(player, &config)?,
            config,
        })
    }

    pub fn player(&self) -> Player {
        self.search.player()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the last call to [`MoveSelector::decide`].
    pub fn last_stats(&self) -> SearchStats {
        self.search.stats()
    }

    pub fn choose_move(&mut self, board: &Board) -> Result<usize, SearchError> {
        self.decide(board).map(|decision| decision.column)
    }

    pub fn decide(&mut self, board: &Board) -> Result<Decision, SearchError> {
        self.search.reset_stats();

        let moves = valid_moves(board);
        if moves.is_empty() {
            return Err(SearchError::NoLegalMove);
        }

        let me = self.player();
        if let Some(column) = find_winning_move(board, me) {
            trace!("{} wins immediately in column {column}", me.name());
            return Ok(Decision {
                column,
                reason: Reason::Win,
            });
        }
        if let Some(column) = find_winning_move(board, me.other()) {
            trace!("{} blocks column {column}", me.name());
            return Ok(Decision {
                column,
                reason: Reason::Block,
            });
        }

        let child_depth = self.config.depth.saturating_sub(1);
        let mut best: Option<(usize, i32)> = None;

        for &col in &moves {
            let mut child = *board;
            if child.place(col, me).is_none() {
                continue;
            }
            let score = if self.config.pruning {
                self.search.alpha_beta(&child, child_depth, i32::MIN, i32::MAX, false)
            } else {
                self.search.minimax(&child, child_depth, false)
            };
            trace!("column {col} scores {score}");

            // Strict comparison keeps the earliest (most central) column on ties
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }

        let (column, score) = best.ok_or(SearchError::NoLegalMove)?;
        let stats = self.search.stats();
        debug!(
            "{} plays column {column} (score {score}, depth {}, {} nodes, {} cutoffs)",
            me.name(),
            self.config.depth,
            stats.nodes,
            stats.cutoffs
        );

        Ok(Decision {
            column,
            reason: Reason::Searched { score },
        })
    }
}

/// First column, in search order, where `player` would complete four in a row.
pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
    valid_moves(board).into_iter().find(|&col| {
        let mut child = *board;
        child
            .place(col, player)
            .is_some_and(|row| child.is_winning_placement(col, row, player))
    })
}
