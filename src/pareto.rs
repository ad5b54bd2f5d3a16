//! Pareto optimality among a finite set of outcome vectors.

use super::{
    error::{Error, Result},
    trace::{Trace, Traced},
};

/// Whether `a` weakly dominates `b` in every coordinate with at least one
/// strict improvement. A vector never dominates itself.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b.iter()).all(|(x, y)| x >= y)
        && a.iter().zip(b.iter()).any(|(x, y)| x > y)
}

fn check_arity(vectors: &[Vec<f64>]) -> Result<()> {
    if let Some(first) = vectors.first() {
        for (i, v) in vectors.iter().enumerate() {
            if v.len() != first.len() {
                return Err(Error::shape(format!(
                    "vector {} has {} entries, expected {}",
                    i,
                    v.len(),
                    first.len()
                )));
            }
        }
    }
    Ok(())
}

/// For every vector, whether it is Pareto optimal within `vectors`.
pub fn classify(vectors: &[Vec<f64>]) -> Result<Vec<bool>> {
    check_arity(vectors)?;
    let optimal = vectors
        .iter()
        .enumerate()
        .map(|(i, target)| {
            !vectors
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && dominates(other, target))
        })
        .collect();
    debug!("pareto classification: {:?}", optimal);
    Ok(optimal)
}

/// Indices of the Pareto-optimal vectors.
pub fn front(vectors: &[Vec<f64>]) -> Result<Vec<usize>> {
    Ok(classify(vectors)?
        .into_iter()
        .enumerate()
        .filter(|(_, optimal)| *optimal)
        .map(|(i, _)| i)
        .collect())
}

/// [`classify`] with one explanatory line per vector.
pub fn report(vectors: &[Vec<f64>]) -> Result<Traced<Vec<bool>>> {
    let optimal = classify(vectors)?;
    let mut trace = Trace::new();
    for (v, is_optimal) in vectors.iter().zip(optimal.iter()) {
        if *is_optimal {
            trace.push(format!("{:?} is pareto optimal", v));
        } else {
            trace.push(format!("{:?} is not pareto optimal", v));
        }
    }
    Ok(Traced::new(optimal, trace))
}
