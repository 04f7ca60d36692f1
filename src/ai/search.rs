use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{Board, Player, COLS, ROWS};

use super::eval::{EvalWeights, Heuristic, PositionalHeuristic};
use super::moves::valid_moves;

/// Search tunables. Everything the search and evaluator need is carried
/// here so callers can run several depths or weight sets side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched from the root, counting the root move itself.
    pub depth: u32,
    /// Base magnitude of a forced win or loss, before the depth bonus.
    pub win_score: i32,
    /// Use alpha-beta; `false` runs the full-window reference minimax.
    pub pruning: bool,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 5,
            win_score: 1_000_000,
            pruning: true,
            weights: EvalWeights::default(),
        }
    }
}

/// Deepest search that can make sense: one ply per empty cell.
pub const MAX_DEPTH: u32 = (COLS * ROWS) as u32;

impl SearchConfig {
    /// Reject settings that would let a forced result tie or lose to a
    /// heuristic score, or overflow the score arithmetic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_DEPTH}"
            )));
        }

        let weights = &self.weights;
        for (name, value) in [
            ("center", weights.center),
            ("adjacent", weights.adjacent),
            ("two", weights.two),
            ("three", weights.three),
        ] {
            if value < 0 {
                return Err(ConfigError::Validation(format!(
                    "search.weights.{name} must be >= 0"
                )));
            }
        }

        if i64::from(self.win_score) <= weights.max_magnitude() {
            return Err(ConfigError::Validation(format!(
                "search.win_score must be > {}",
                weights.max_magnitude()
            )));
        }
        check_win_score(self.win_score)
    }
}

/// The depth bonus is added on top of `win_score`, so leave room for it.
fn check_win_score(win_score: i32) -> Result<(), ConfigError> {
    if win_score <= 0 {
        return Err(ConfigError::Validation(
            "search.win_score must be > 0".into(),
        ));
    }
    if i64::from(win_score) + i64::from(MAX_DEPTH) >= i64::from(i32::MAX) {
        return Err(ConfigError::Validation(
            "search.win_score leaves no room for the depth bonus".into(),
        ));
    }
    Ok(())
}

/// Node counters for the most recent decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Depth-limited minimax over private board copies, scored from the point
/// of view of `player` (the maximizing side).
pub struct Search {
    player: Player,
    win_score: i32,
    heuristic: Box<dyn Heuristic>,
    stats: SearchStats,
}

impl Search {
    pub fn new(player: Player, config: &SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Search::with_heuristic(
            player,
            config.win_score,
            Box::new(PositionalHeuristic::new(config.weights)),
        )
    }

    /// Search with a caller-supplied evaluator. `win_score` must exceed
    /// anything `heuristic` returns.
    pub fn with_heuristic(
        player: Player,
        win_score: i32,
        heuristic: Box<dyn Heuristic>,
    ) -> Result<Self, ConfigError> {
        check_win_score(win_score)?;
        Ok(Search {
            player,
            win_score,
            heuristic,
            stats: SearchStats::default(),
        })
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Static evaluation of `board` for the maximizing side.
    pub fn evaluate(&self, board: &Board) -> i32 {
        self.heuristic.evaluate(board, self.player)
    }

    fn mover(&self, maximizing: bool) -> Player {
        if maximizing {
            self.player
        } else {
            self.player.other()
        }
    }

    /// Score of a win completed with `depth` plies still to go. Shallower wins
    /// carry more remaining depth, so they outrank deeper ones.
    fn decisive_score(&self, depth: u32, maximizing: bool) -> i32 {
        let bonus = depth.min(MAX_DEPTH) as i32;
        let magnitude = self.win_score.saturating_add(bonus);
        if maximizing {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Fail-soft alpha-beta. With a full window (`i32::MIN`, `i32::MAX`) the
    /// result equals [`Search::minimax`] for the same board and depth.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        let moves = valid_moves(board);
        if moves.is_empty() {
            return 0;
        }
        if depth == 0 {
            return self.evaluate(board);
        }

        let mover = self.mover(maximizing);
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in moves {
            let mut child = *board;
            let Some(row) = child.place(col, mover) else {
                continue;
            };
            if child.is_winning_placement(col, row, mover) {
                return self.decisive_score(depth, maximizing);
            }

            let score = self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Plain minimax: every child of every node is searched.
    pub fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool) -> i32 {
        self.stats.nodes += 1;

        let moves = valid_moves(board);
        if moves.is_empty() {
            return 0;
        }
        if depth == 0 {
            return self.evaluate(board);
        }

        let mover = self.mover(maximizing);
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in moves {
            let mut child = *board;
            let Some(row) = child.place(col, mover) else {
                continue;
            };
            if child.is_winning_placement(col, row, mover) {
                return self.decisive_score(depth, maximizing);
            }

            let score = self.minimax(&child, depth - 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{board_from, drawn_board};

    fn search() -> Search {
        Search::new(Player::Yellow, &SearchConfig::default()).unwrap()
    }

    /// Scores a board by piece count in column 0 only.
    struct LeftColumnHeuristic;

    impl Heuristic for LeftColumnHeuristic {
        fn evaluate(&self, board: &Board, player: Player) -> i32 {
            (0..ROWS)
                .map(|row| match board.get(0, row) {
                    cell if cell == player.to_cell() => 1,
                    cell if cell == player.other().to_cell() => -1,
                    _ => 0,
                })
                .sum()
        }
    }

    fn positions() -> Vec<Board> {
        vec![
            Board::new(),
            board_from(&[(3, Player::Red)]),
            board_from(&[
                (3, Player::Red),
                (3, Player::Yellow),
                (4, Player::Red),
                (2, Player::Yellow),
            ]),
            board_from(&[
                (0, Player::Red),
                (0, Player::Yellow),
                (1, Player::Red),
                (2, Player::Yellow),
                (1, Player::Red),
                (5, Player::Yellow),
                (6, Player::Red),
            ]),
            board_from(&[
                (3, Player::Red),
                (3, Player::Yellow),
                (3, Player::Red),
                (3, Player::Yellow),
                (2, Player::Red),
                (4, Player::Yellow),
                (2, Player::Red),
                (4, Player::Yellow),
            ]),
        ]
    }

    #[test]
    fn full_board_scores_zero_at_any_depth() {
        let board = drawn_board();
        let mut s = search();
        for depth in 0..4 {
            assert_eq!(s.alpha_beta(&board, depth, i32::MIN, i32::MAX, true), 0);
            assert_eq!(s.minimax(&board, depth, false), 0);
        }
    }

    #[test]
    fn depth_zero_returns_static_evaluation() {
        let board = board_from(&[(3, Player::Yellow), (2, Player::Red)]);
        let mut s = search();
        let expected = PositionalHeuristic::default().evaluate(&board, Player::Yellow);
        assert_eq!(s.alpha_beta(&board, 0, i32::MIN, i32::MAX, true), expected);
        assert_eq!(s.alpha_beta(&board, 0, i32::MIN, i32::MAX, false), expected);
    }

    #[test]
    fn immediate_win_scores_win_plus_remaining_depth() {
        let board = board_from(&[(0, Player::Yellow), (0, Player::Yellow), (0, Player::Yellow)]);
        let mut s = search();
        let win = SearchConfig::default().win_score;
        assert_eq!(s.alpha_beta(&board, 3, i32::MIN, i32::MAX, true), win + 3);
        assert_eq!(s.alpha_beta(&board, 1, i32::MIN, i32::MAX, true), win + 1);
    }

    #[test]
    fn immediate_loss_scores_negative_win_minus_remaining_depth() {
        let board = board_from(&[(6, Player::Red), (6, Player::Red), (6, Player::Red)]);
        let mut s = search();
        let win = SearchConfig::default().win_score;
        assert_eq!(s.alpha_beta(&board, 2, i32::MIN, i32::MAX, false), -(win + 2));
    }

    #[test]
    fn forced_loss_is_seen_one_ply_later() {
        // Red threatens column 6 vertically; Yellow to move, depth 2
        let board = board_from(&[(6, Player::Red), (6, Player::Red), (6, Player::Red)]);
        let mut s = search();
        let score = s.alpha_beta(&board, 2, i32::MIN, i32::MAX, true);
        // Blocking in column 6 keeps the score heuristic
        assert!(score.abs() < 10_000, "expected a heuristic score, got {score}");
    }

    #[test]
    fn alpha_beta_matches_minimax() {
        for board in positions() {
            for depth in 1..=4 {
                for maximizing in [true, false] {
                    let mut pruned = search();
                    let mut full = search();
                    assert_eq!(
                        pruned.alpha_beta(&board, depth, i32::MIN, i32::MAX, maximizing),
                        full.minimax(&board, depth, maximizing),
                        "depth {depth}, maximizing {maximizing}, board\n{board}"
                    );
                }
            }
        }
    }

    #[test]
    fn pruning_visits_fewer_nodes() {
        let board = Board::new();
        let mut pruned = search();
        let mut full = search();
        pruned.alpha_beta(&board, 4, i32::MIN, i32::MAX, true);
        full.minimax(&board, 4, true);
        assert!(pruned.stats().cutoffs > 0);
        assert!(pruned.stats().nodes < full.stats().nodes);
        assert_eq!(full.stats().cutoffs, 0);
    }

    #[test]
    fn search_never_mutates_the_callers_board() {
        let board = board_from(&[(3, Player::Red), (2, Player::Yellow)]);
        let before = board;
        let mut s = search();
        s.alpha_beta(&board, 4, i32::MIN, i32::MAX, true);
        s.minimax(&board, 3, false);
        assert_eq!(board, before);
    }

    #[test]
    fn reset_stats_clears_counters() {
        let mut s = search();
        s.alpha_beta(&Board::new(), 2, i32::MIN, i32::MAX, true);
        assert!(s.stats().nodes > 0);
        s.reset_stats();
        assert_eq!(s.stats(), SearchStats::default());
    }

    #[test]
    fn default_config_is_valid() {
        SearchConfig::default().validate().unwrap();
    }

    #[test]
    fn win_score_without_depth_headroom_is_rejected() {
        let config = SearchConfig {
            win_score: i32::MAX,
            depth: 4,
            ..SearchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
        assert!(Search::new(Player::Yellow, &config).is_err());
    }

    #[test]
    fn win_score_below_heuristic_range_is_rejected() {
        for win_score in [0, -5, 100] {
            let config = SearchConfig {
                win_score,
                ..SearchConfig::default()
            };
            assert!(config.validate().is_err(), "win_score {win_score} accepted");
        }
    }

    #[test]
    fn negative_or_oversized_weights_are_rejected() {
        let mut config = SearchConfig::default();
        config.weights.three = -1;
        assert!(config.validate().is_err());

        // Large enough that the window sum could pass the win score
        let mut config = SearchConfig::default();
        config.weights.three = 1_000_000;
        assert!(config.validate().is_err());

        let mut config = SearchConfig::default();
        config.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn custom_heuristic_drives_leaf_scores() {
        let board = board_from(&[(0, Player::Yellow), (0, Player::Yellow), (3, Player::Red)]);
        let mut s = Search::with_heuristic(Player::Yellow, 1_000, Box::new(LeftColumnHeuristic))
            .unwrap();
        assert_eq!(s.evaluate(&board), 2);
        assert_eq!(s.alpha_beta(&board, 0, i32::MIN, i32::MAX, true), 2);
        // Yellow stacks a third piece in column 0, Red caps it
        assert_eq!(s.alpha_beta(&board, 2, i32::MIN, i32::MAX, true), 2);
        assert_eq!(s.minimax(&board, 2, true), 2);
    }

    #[test]
    fn custom_heuristic_still_needs_a_positive_win_score() {
        assert!(Search::with_heuristic(Player::Red, 0, Box::new(LeftColumnHeuristic)).is_err());
    }
}
