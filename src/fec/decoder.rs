use clap::ValueEnum;
use log::{debug, trace};
use serde::Deserialize;
use std::time::Instant;

use super::field::{self, mul, mul_sub};
use super::{Elem, Matrix};
use crate::error::{FecError, Result};
use crate::telemetry;

/// How the solver reacts to a zero on the diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
pub enum SolveStrategy {
    /// Fail on the first zero pivot without searching for a replacement row.
    #[default]
    #[serde(rename = "strict")]
    #[value(name = "strict")]
    Strict,
    /// Swap in the first lower row with a nonzero entry in the pivot column.
    #[serde(rename = "partial")]
    #[value(name = "partial")]
    PartialPivot,
}

fn check_shape(matrix: &[Vec<Elem>], results: &[Elem]) -> Result<()> {
    let n = matrix.len();
    if results.len() != n {
        return Err(FecError::InvalidShape {
            expected: n,
            found: results.len(),
        });
    }
    for row in matrix {
        if row.len() != n {
            return Err(FecError::InvalidShape {
                expected: n,
                found: row.len(),
            });
        }
    }
    let stray = matrix
        .iter()
        .flatten()
        .chain(results.iter())
        .find(|&&v| !field::contains(v));
    match stray {
        Some(&value) => Err(FecError::OutOfField { value }),
        None => Ok(()),
    }
}

/// Solves `A·x = b` by Gauss-Jordan elimination without pivoting.
///
/// Both arguments are overwritten: `matrix` ends as the identity and `results`
/// as the solution, of which a copy is returned. Clone them first if they are
/// needed afterwards.
pub fn solve(matrix: &mut [Vec<Elem>], results: &mut [Elem]) -> Result<Vec<Elem>> {
    solve_with(matrix, results, SolveStrategy::Strict)
}

/// Like [`solve`], with an explicit pivot policy.
pub fn solve_with(
    matrix: &mut [Vec<Elem>],
    results: &mut [Elem],
    strategy: SolveStrategy,
) -> Result<Vec<Elem>> {
    check_shape(matrix, results)?;
    crate::telemetry!(telemetry::SOLVE_CALLS.inc());
    let start = Instant::now();
    let n = matrix.len();

    for i in 0..n {
        if matrix[i][i] == 0 {
            let replacement = match strategy {
                SolveStrategy::Strict => None,
                SolveStrategy::PartialPivot => (i + 1..n).find(|&r| matrix[r][i] != 0),
            };
            match replacement {
                Some(r) => {
                    trace!("swapping rows {} and {}", i, r);
                    matrix.swap(i, r);
                    results.swap(i, r);
                }
                None => {
                    crate::telemetry!(telemetry::SINGULAR_MATRICES.inc());
                    debug!("zero pivot at row {} of {}", i, n);
                    return Err(FecError::SingularMatrix { row: i });
                }
            }
        }

        // Pivot is nonzero here, so the inverse exists.
        let inv_pivot = field::inv(matrix[i][i]).ok_or(FecError::SingularMatrix { row: i })?;
        for v in matrix[i].iter_mut() {
            *v = mul(*v, inv_pivot);
        }
        results[i] = mul(results[i], inv_pivot);

        let pivot_row = matrix[i].clone();
        let pivot_result = results[i];
        for j in 0..n {
            if j == i {
                continue;
            }
            let factor = matrix[j][i];
            if factor == 0 {
                continue;
            }
            for (t, &s) in matrix[j].iter_mut().zip(&pivot_row) {
                *t = mul_sub(factor, s, *t);
            }
            results[j] = mul_sub(factor, pivot_result, results[j]);
        }
    }

    crate::telemetry!(telemetry::DECODING_TIME_US.set(start.elapsed().as_micros() as i64));
    Ok(results.to_vec())
}

/// Recovers messages from coefficient matrices and encoded symbols without
/// disturbing the caller's copies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    strategy: SolveStrategy,
}

impl Decoder {
    pub fn new(strategy: SolveStrategy) -> Self {
        Self { strategy }
    }

    /// Runs the elimination on a scratch copy of `matrix`.
    ///
    /// `Ok(false)` means a zero pivot was hit under the configured strategy.
    pub fn is_invertible(&self, matrix: &Matrix) -> Result<bool> {
        let mut scratch = matrix.clone();
        let mut zeros = vec![0; matrix.len()];
        match solve_with(&mut scratch, &mut zeros, self.strategy) {
            Ok(_) => Ok(true),
            Err(FecError::SingularMatrix { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Solves on clones of `matrix` and `encoded`.
    pub fn decode(&self, matrix: &Matrix, encoded: &[Elem]) -> Result<Vec<Elem>> {
        let mut m = matrix.clone();
        let mut b = encoded.to_vec();
        solve_with(&mut m, &mut b, self.strategy)
    }
}
