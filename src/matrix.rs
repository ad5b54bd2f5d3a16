//! Payoff matrices for two-player normal-form games.
//!
//! A [`PayoffMatrix`] holds one player's payoffs over the joint action grid:
//! the row index is player 1's action, the column index is player 2's.
//! A [`PayoffTensor`] stacks one matrix per player for general-sum games.

use super::{
    error::{Error, Result},
    player::Player,
};
use serde::{Deserialize, Serialize};

/// Axis of a payoff matrix.
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Debug)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub fn other(&self) -> Axis {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct PayoffMatrix {
    rows: usize,
    cols: usize,
    entries: Vec<f64>,
}

impl PayoffMatrix {
    /// Build a matrix from its rows.
    ///
    /// Fails with [`Error::Shape`] if the matrix is empty or ragged, and with
    /// [`Error::NonFinite`] if any entry is NaN or infinite.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        if n_rows == 0 {
            return Err(Error::shape("payoff matrix has no rows"));
        }
        let n_cols = rows[0].len();
        if n_cols == 0 {
            return Err(Error::shape("payoff matrix has no columns"));
        }
        let mut entries = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::shape(format!(
                    "ragged matrix: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            for (j, value) in row.into_iter().enumerate() {
                if !value.is_finite() {
                    return Err(Error::NonFinite { row: i, column: j });
                }
                entries.push(value);
            }
        }
        Ok(PayoffMatrix {
            rows: n_rows,
            cols: n_cols,
            entries,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len_along(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.rows,
            Axis::Column => self.cols,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.entries[row * self.cols + col]
    }

    /// Entry addressed by an index along `axis` and an index along the other axis.
    pub fn get_along(&self, axis: Axis, outer: usize, inner: usize) -> f64 {
        match axis {
            Axis::Row => self.get(outer, inner),
            Axis::Column => self.get(inner, outer),
        }
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.entries[i * self.cols..(i + 1) * self.cols]
    }

    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows).map(move |i| self.get(i, j))
    }

    /// The same game from the other player's side of a zero-sum encoding.
    pub fn negated(&self) -> PayoffMatrix {
        PayoffMatrix {
            rows: self.rows,
            cols: self.cols,
            entries: self.entries.iter().map(|v| -v).collect(),
        }
    }

    pub fn transposed(&self) -> PayoffMatrix {
        let mut entries = Vec::with_capacity(self.entries.len());
        for j in 0..self.cols {
            entries.extend(self.column(j));
        }
        PayoffMatrix {
            rows: self.cols,
            cols: self.rows,
            entries,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Range-check a strategy index of `player` against this matrix.
    pub fn check_strategy(&self, player: Player, index: usize) -> Result<()> {
        let bound = self.len_along(player.axis());
        if index >= bound {
            return Err(Error::Index {
                player,
                index,
                bound,
            });
        }
        Ok(())
    }
}

/// One payoff matrix per player over a shared action grid.
#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct PayoffTensor {
    matrices: [PayoffMatrix; 2],
}

impl PayoffTensor {
    /// Build a tensor shaped (players, actions of P1, actions of P2).
    pub fn new(tensor: Vec<Vec<Vec<f64>>>) -> Result<Self> {
        if tensor.len() != 2 {
            return Err(Error::shape(format!(
                "payoff tensor must hold one matrix per player (2), got {}",
                tensor.len()
            )));
        }
        let mut matrices = tensor.into_iter().map(PayoffMatrix::new);
        let (u1, u2) = match (matrices.next(), matrices.next()) {
            (Some(u1), Some(u2)) => (u1?, u2?),
            _ => return Err(Error::shape("payoff tensor is missing a player")),
        };
        Self::from_matrices(u1, u2)
    }

    pub fn from_matrices(u1: PayoffMatrix, u2: PayoffMatrix) -> Result<Self> {
        if u1.rows() != u2.rows() || u1.cols() != u2.cols() {
            return Err(Error::shape(format!(
                "player matrices differ in shape: {}x{} vs {}x{}",
                u1.rows(),
                u1.cols(),
                u2.rows(),
                u2.cols()
            )));
        }
        Ok(PayoffTensor {
            matrices: [u1, u2],
        })
    }

    /// Build a tensor from bimatrix cells `(u1, u2)`.
    pub fn from_pairs(cells: Vec<Vec<(f64, f64)>>) -> Result<Self> {
        let u1 = cells
            .iter()
            .map(|row| row.iter().map(|(a, _)| *a).collect())
            .collect();
        let u2 = cells
            .iter()
            .map(|row| row.iter().map(|(_, b)| *b).collect())
            .collect();
        Self::from_matrices(PayoffMatrix::new(u1)?, PayoffMatrix::new(u2)?)
    }

    /// The general-sum view of a zero-sum game.
    pub fn zero_sum(matrix: &PayoffMatrix) -> Self {
        PayoffTensor {
            matrices: [matrix.clone(), matrix.negated()],
        }
    }

    pub fn of(&self, player: Player) -> &PayoffMatrix {
        &self.matrices[player.index()]
    }

    pub fn rows(&self) -> usize {
        self.matrices[0].rows()
    }

    pub fn cols(&self) -> usize {
        self.matrices[0].cols()
    }

    pub fn check_strategy(&self, player: Player, index: usize) -> Result<()> {
        self.matrices[0].check_strategy(player, index)
    }
}
