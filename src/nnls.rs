//! Non-negative least squares by the Lawson & Hanson (1974) active-set method

use crate::float_trait::Float;

use conv::prelude::*;
use ndarray::{Array1, Array2};

/// Solves `min ||A x - b||_2` subject to `x >= 0` for a dense matrix.
///
/// Returns the solution together with the Euclidean residual norm, or `None`
/// when a passive-set subproblem turns singular, an iteration cap is hit, or
/// the arithmetic degenerates to non-finite values. Both loops are bounded, so
/// the call always terminates.
pub(crate) fn nnls<T>(a: &Array2<T>, b: &Array1<T>) -> Option<(Array1<T>, T)>
where
    T: Float,
{
    let (m, n) = a.dim();
    debug_assert_eq!(m, b.len());

    let norm1 = a
        .columns()
        .into_iter()
        .map(|column| column.iter().fold(T::zero(), |sum, &v| sum + v.abs()))
        .fold(T::zero(), T::max);
    let tol = T::ten() * T::epsilon() * norm1 * m.max(n).value_as::<T>().unwrap();

    let mut x = Array1::<T>::zeros(n);
    let mut passive = vec![false; n];
    let mut optimal = false;
    for _ in 0..3 * n {
        // negative gradient of the objective at the current iterate
        let w = a.t().dot(&(b - &a.dot(&x)));
        let jmax = (0..n)
            .filter(|&j| !passive[j] && w[j] > tol)
            .fold(None, |best, j| match best {
                Some(jbest) if w[jbest] >= w[j] => Some(jbest),
                _ => Some(j),
            });
        let Some(jmax) = jmax else {
            optimal = true;
            break;
        };
        passive[jmax] = true;

        let mut feasible = false;
        for _ in 0..3 * n {
            let z = solve_passive(a, b, &passive)?;
            if (0..n).filter(|&j| passive[j]).all(|j| z[j] > T::zero()) {
                x = z;
                feasible = true;
                break;
            }
            // longest step towards z keeping x non-negative
            let alpha = (0..n)
                .filter(|&j| passive[j] && z[j] <= T::zero() && x[j] != z[j])
                .map(|j| x[j] / (x[j] - z[j]))
                .fold(T::infinity(), T::min);
            if !alpha.is_finite() {
                return None;
            }
            for j in 0..n {
                if !passive[j] {
                    continue;
                }
                x[j] = x[j] + alpha * (z[j] - x[j]);
                if z[j] <= T::zero() && x[j] <= tol {
                    x[j] = T::zero();
                    passive[j] = false;
                }
            }
        }
        if !feasible {
            return None;
        }
    }
    if !optimal {
        return None;
    }

    let residual = b - &a.dot(&x);
    let residual_norm = residual
        .iter()
        .fold(T::zero(), |sum, &v| sum + v.powi(2))
        .sqrt();
    if x.iter().any(|v| !v.is_finite()) || !residual_norm.is_finite() {
        return None;
    }
    Some((x, residual_norm))
}

/// Unconstrained least squares restricted to the passive columns, via normal
/// equations. The result is scattered back into a full-length vector with
/// zeros on the active set.
fn solve_passive<T>(a: &Array2<T>, b: &Array1<T>, passive: &[bool]) -> Option<Array1<T>>
where
    T: Float,
{
    let index: Vec<usize> = passive
        .iter()
        .enumerate()
        .filter_map(|(j, &inside)| inside.then_some(j))
        .collect();
    let k = index.len();
    let mut gram = Array2::<T>::zeros((k, k));
    let mut rhs = Array1::<T>::zeros(k);
    for (p, &jp) in index.iter().enumerate() {
        let column = a.column(jp);
        rhs[p] = column.dot(b);
        for (q, &jq) in index.iter().enumerate() {
            gram[[p, q]] = column.dot(&a.column(jq));
        }
    }
    let solution = solve_dense(gram, rhs)?;
    let mut z = Array1::zeros(passive.len());
    for (&j, &v) in index.iter().zip(solution.iter()) {
        z[j] = v;
    }
    Some(z)
}

/// Gaussian elimination with partial pivoting, `None` on a degenerate pivot
fn solve_dense<T>(mut matrix: Array2<T>, mut rhs: Array1<T>) -> Option<Array1<T>>
where
    T: Float,
{
    let k = rhs.len();
    let scale = matrix.iter().fold(T::zero(), |s, &v| s.max(v.abs()));
    let tiny = T::epsilon() * scale;
    for col in 0..k {
        let (pivot_row, pivot_abs) =
            (col..k).fold((col, matrix[[col, col]].abs()), |(row, max), candidate| {
                let value = matrix[[candidate, col]].abs();
                if value > max { (candidate, value) } else { (row, max) }
            });
        if pivot_abs <= tiny {
            return None;
        }
        if pivot_row != col {
            for j in col..k {
                matrix.swap([col, j], [pivot_row, j]);
            }
            rhs.swap(col, pivot_row);
        }
        for row in col + 1..k {
            let factor = matrix[[row, col]] / matrix[[col, col]];
            for j in col..k {
                let sub = factor * matrix[[col, j]];
                matrix[[row, j]] = matrix[[row, j]] - sub;
            }
            rhs[row] = rhs[row] - factor * rhs[col];
        }
    }
    let mut x = Array1::zeros(k);
    for i in (0..k).rev() {
        let mut sum = rhs[i];
        for j in i + 1..k {
            sum = sum - matrix[[i, j]] * x[j];
        }
        x[i] = sum / matrix[[i, i]];
    }
    Some(x)
}
