//! Reduce-then-select over a payoff matrix.
//!
//! Maximin and minimax for either player, zero-sum or general-sum, are all
//! the same two-step operation: for every action along one axis take an
//! extremum across the other axis, then take an extremum over the results.
//! Which axis is "self" and which pair of operators is used are the only
//! parameters.

use super::{
    action::ActionId,
    matrix::{Axis, PayoffMatrix},
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Debug)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    /// Whether `candidate` strictly beats `incumbent`.
    pub fn improves(&self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Extremum::Max => candidate > incumbent,
            Extremum::Min => candidate < incumbent,
        }
    }

    pub fn opposite(&self) -> Extremum {
        match self {
            Extremum::Max => Extremum::Min,
            Extremum::Min => Extremum::Max,
        }
    }
}

/// Index and value of the extremum of `value_at(0..len)`.
///
/// Scans left to right and only moves on strict improvement, so ties go to
/// the lowest index. `len` must be at least one.
pub fn argext<F>(len: usize, ext: Extremum, value_at: F) -> (usize, f64)
where
    F: Fn(usize) -> f64,
{
    let mut best = (0, value_at(0));
    for i in 1..len {
        let value = value_at(i);
        if ext.improves(value, best.1) {
            best = (i, value);
        }
    }
    best
}

/// Result of a reduction.
///
/// `strategy` is the index selected along the outer axis and `response` is
/// the index along the other axis attaining the inner extremum there.
#[derive(Clone, Copy, Serialize, PartialEq, Debug)]
pub struct Solution {
    pub strategy: ActionId,
    pub response: ActionId,
    pub value: f64,
}

impl Solution {
    /// The same selection with the value seen from the other side of a
    /// zero-sum game.
    pub fn negated(self) -> Solution {
        Solution {
            value: -self.value,
            ..self
        }
    }
}

/// Take `inner` across the other axis for every index along `outer_axis`,
/// then select the index whose reduced value is the `outer` extremum.
pub fn reduce(matrix: &PayoffMatrix, outer_axis: Axis, outer: Extremum, inner: Extremum) -> Solution {
    let inner_len = matrix.len_along(outer_axis.other());
    let reduced: Vec<(usize, f64)> = (0..matrix.len_along(outer_axis))
        .map(|i| argext(inner_len, inner, |j| matrix.get_along(outer_axis, i, j)))
        .collect();
    debug!(
        "reduce {:?}/{:?} along {:?}: {:?}",
        outer, inner, outer_axis, reduced
    );

    let (strategy, value) = argext(reduced.len(), outer, |i| reduced[i].1);
    Solution {
        strategy: ActionId::new(strategy),
        response: ActionId::new(reduced[strategy].0),
        value,
    }
}
