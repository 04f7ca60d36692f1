use serde::{Deserialize, Serialize};

use crate::game::{Board, Cell, Player, CENTER_COL, COLS, DIRECTIONS, ROWS};

/// Number of cells in a winning line.
const WINDOW: usize = 4;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Scoring constants for [`PositionalHeuristic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per piece in the center column.
    pub center: i32,
    /// Per piece in either column next to the center.
    pub adjacent: i32,
    /// Per window holding two pieces of one side and two empties.
    pub two: i32,
    /// Per window holding three pieces of one side and one empty.
    pub three: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            center: 3,
            adjacent: 2,
            two: 10,
            three: 50,
        }
    }
}

impl EvalWeights {
    /// Upper bound on the absolute value [`PositionalHeuristic`] can return.
    pub fn max_magnitude(&self) -> i64 {
        let positional = ROWS as i64 * (self.center as i64 + 2 * self.adjacent as i64);
        let windows = window_count() as i64 * (self.two.max(self.three) as i64);
        positional + windows
    }
}

/// Every 4-cell line on the board, as (start column, start row, direction).
fn windows() -> impl Iterator<Item = (usize, usize, (isize, isize))> {
    (0..COLS).flat_map(|col| {
        (0..ROWS).flat_map(move |row| {
            DIRECTIONS
                .into_iter()
                .filter(move |&(dc, dr)| {
                    let end_col = col as isize + dc * (WINDOW as isize - 1);
                    let end_row = row as isize + dr * (WINDOW as isize - 1);
                    (0..COLS as isize).contains(&end_col) && (0..ROWS as isize).contains(&end_row)
                })
                .map(move |dir| (col, row, dir))
        })
    })
}

fn window_count() -> usize {
    windows().count()
}

/// Center-column bonus plus a scan of all 4-cell windows for open twos and
/// threes. Symmetric: the opponent's features subtract exactly what the same
/// features would add for `player`.
#[derive(Debug, Clone, Default)]
pub struct PositionalHeuristic {
    weights: EvalWeights,
}

impl PositionalHeuristic {
    pub fn new(weights: EvalWeights) -> Self {
        PositionalHeuristic { weights }
    }

    fn column_weight(&self, col: usize) -> i32 {
        match col.abs_diff(CENTER_COL) {
            0 => self.weights.center,
            1 => self.weights.adjacent,
            _ => 0,
        }
    }

    fn score_window(&self, own: usize, opp: usize, empty: usize) -> i32 {
        match (own, opp, empty) {
            (3, 0, 1) => self.weights.three,
            (2, 0, 2) => self.weights.two,
            (0, 3, 1) => -self.weights.three,
            (0, 2, 2) => -self.weights.two,
            _ => 0,
        }
    }
}

impl Heuristic for PositionalHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0;

        for col in 0..COLS {
            let weight = self.column_weight(col);
            if weight == 0 {
                continue;
            }
            for row in 0..ROWS {
                match board.get(col, row) {
                    cell if cell == own_cell => score += weight,
                    cell if cell == opp_cell => score -= weight,
                    _ => {}
                }
            }
        }

        for (col, row, (dc, dr)) in windows() {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for i in 0..WINDOW as isize {
                let c = (col as isize + dc * i) as usize;
                let r = (row as isize + dr * i) as usize;
                match board.get(c, r) {
                    Cell::Empty => empty += 1,
                    cell if cell == own_cell => own += 1,
                    _ => opp += 1,
                }
            }
            score += self.score_window(own, opp, empty);
        }

        score
    }
}
