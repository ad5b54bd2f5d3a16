//! Security values and pure Nash-equilibrium checks for matrix games.
//!
//! Zero-sum games are given as a single [`PayoffMatrix`] holding the row
//! player's payoffs; the column player's payoff is the negation. General-sum
//! games are given as a [`PayoffTensor`] with one matrix per player.
//!
//! # Example
//! ```
//! use nash_rs::*;
//! let m = matrix::PayoffMatrix::new(vec![
//!     vec![12.0, -1.0, 0.0],
//!     vec![5.0, 2.0, 3.0],
//!     vec![-16.0, 0.0, -1.0],
//! ]).unwrap();
//! let lower = solver::maximin(&m);
//! let upper = solver::minimax(&m);
//! assert!(lower.value <= upper.value);
//! assert!(solver::verify_nash_equilibrium(&m, 1, 1).unwrap());
//! ```

use super::{
    action::ActionId,
    error::Result,
    matrix::{PayoffMatrix, PayoffTensor},
    player::Player,
    reduction::{reduce, Extremum, Solution},
    trace::{Trace, Traced},
};
use ord_subset::OrdSubsetIterExt;
use serde::Serialize;

/// Row player's maximin: the best payoff it can guarantee whatever the
/// column player does.
pub fn maximin(matrix: &PayoffMatrix) -> Solution {
    general_maximin_of(matrix, Player::P1)
}

/// Row player's minimax: the least the column player can hold it to.
///
/// `strategy` is the column the opponent punishes with and `response` is
/// the row player's best reply within that column.
pub fn minimax(matrix: &PayoffMatrix) -> Solution {
    general_minimax_of(matrix, Player::P1)
}

/// Column player's maximin, computed on the negated matrix.
/// The value is in the column player's own payoff.
pub fn column_maximin(matrix: &PayoffMatrix) -> Solution {
    general_maximin_of(&matrix.negated(), Player::P2)
}

/// Column player's maximin, computed on the original matrix by minimising
/// the worst loss per column. Identical to [`column_maximin`].
pub fn column_maximin_direct(matrix: &PayoffMatrix) -> Solution {
    reduce(matrix, Player::P2.axis(), Extremum::Min, Extremum::Max).negated()
}

/// Column player's minimax, computed on the negated matrix.
/// `strategy` is the row the row player punishes with.
pub fn column_minimax(matrix: &PayoffMatrix) -> Solution {
    general_minimax_of(&matrix.negated(), Player::P2)
}

/// Column player's minimax, computed on the original matrix by minimising
/// the loss for every row. Identical to [`column_minimax`].
pub fn column_minimax_direct(matrix: &PayoffMatrix) -> Solution {
    reduce(matrix, Player::P1.axis(), Extremum::Max, Extremum::Min).negated()
}

/// Whether `(s1, s2)` is a pure Nash equilibrium of a zero-sum game.
///
/// Neither player may have a strictly better reply: the row player's payoff
/// must be the maximum of column `s2`, and the minimum of row `s1`.
pub fn verify_nash_equilibrium(matrix: &PayoffMatrix, s1: usize, s2: usize) -> Result<bool> {
    matrix.check_strategy(Player::P1, s1)?;
    matrix.check_strategy(Player::P2, s2)?;

    let payoff = matrix.get(s1, s2);
    let row_best = matrix.column(s2).ord_subset_max();
    let col_best = matrix.row(s1).iter().cloned().ord_subset_min();
    debug!(
        "check ({}, {}): payoff {}, column max {:?}, row min {:?}",
        s1, s2, payoff, row_best, col_best
    );
    Ok(row_best == Some(payoff) && col_best == Some(payoff))
}

/// Every pure equilibrium (saddle point) in row-major order.
pub fn pure_equilibria(matrix: &PayoffMatrix) -> Vec<(ActionId, ActionId)> {
    let mut equilibria = Vec::new();
    for s1 in 0..matrix.rows() {
        for s2 in 0..matrix.cols() {
            if let Ok(true) = verify_nash_equilibrium(matrix, s1, s2) {
                equilibria.push((ActionId::new(s1), ActionId::new(s2)));
            }
        }
    }
    equilibria
}

/// Maximin of `player` on its own payoff matrix of a general-sum game.
pub fn general_maximin(tensor: &PayoffTensor, player: Player) -> Solution {
    general_maximin_of(tensor.of(player), player)
}

/// Minimax of `player` on its own payoff matrix of a general-sum game.
/// `strategy` is the opponent's punishing action.
pub fn general_minimax(tensor: &PayoffTensor, player: Player) -> Solution {
    general_minimax_of(tensor.of(player), player)
}

fn general_maximin_of(own: &PayoffMatrix, player: Player) -> Solution {
    reduce(own, player.axis(), Extremum::Max, Extremum::Min)
}

fn general_minimax_of(own: &PayoffMatrix, player: Player) -> Solution {
    reduce(own, player.opponent().axis(), Extremum::Min, Extremum::Max)
}

/// Whether `(s1, s2)` is a pure Nash equilibrium of a general-sum game,
/// each player judged on its own payoff.
pub fn verify_general_equilibrium(tensor: &PayoffTensor, s1: usize, s2: usize) -> Result<bool> {
    tensor.check_strategy(Player::P1, s1)?;
    tensor.check_strategy(Player::P2, s2)?;

    let u1 = tensor.of(Player::P1);
    let u2 = tensor.of(Player::P2);
    let p1_best = u1.column(s2).ord_subset_max();
    let p2_best = u2.row(s1).iter().cloned().ord_subset_max();
    Ok(p1_best == Some(u1.get(s1, s2)) && p2_best == Some(u2.get(s1, s2)))
}

/// Security values of both players.
#[derive(Clone, Copy, Serialize, PartialEq, Debug)]
pub struct Security {
    pub maximin: [Solution; 2],
    pub minimax: [Solution; 2],
}

impl Security {
    pub fn maximin_of(&self, player: Player) -> &Solution {
        &self.maximin[player.index()]
    }

    pub fn minimax_of(&self, player: Player) -> &Solution {
        &self.minimax[player.index()]
    }

    /// Whether both players' maximin equals their minimax.
    pub fn is_determined(&self) -> bool {
        Player::ALL
            .iter()
            .all(|p| self.maximin[p.index()].value == self.minimax[p.index()].value)
    }
}

/// Security values of a zero-sum game, with an explanation.
pub fn analyze(matrix: &PayoffMatrix) -> Traced<Security> {
    analyze_general(&PayoffTensor::zero_sum(matrix))
}

/// Security values of a general-sum game, with an explanation.
pub fn analyze_general(tensor: &PayoffTensor) -> Traced<Security> {
    let mut trace = Trace::new();
    let maximin = [
        general_maximin(tensor, Player::P1),
        general_maximin(tensor, Player::P2),
    ];
    let minimax = [
        general_minimax(tensor, Player::P1),
        general_minimax(tensor, Player::P2),
    ];
    for player in Player::ALL.iter() {
        let lower = &maximin[player.index()];
        trace.push(format!(
            "{:?} maximin: play {} to guarantee {} (worst case when {:?} plays {})",
            player,
            lower.strategy,
            lower.value,
            player.opponent(),
            lower.response
        ));
        let upper = &minimax[player.index()];
        trace.push(format!(
            "{:?} minimax: {:?} holds it to {} by playing {} (best reply {})",
            player,
            player.opponent(),
            upper.value,
            upper.strategy,
            upper.response
        ));
    }
    Traced::new(Security { maximin, minimax }, trace)
}
