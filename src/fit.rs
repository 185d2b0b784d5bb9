use crate::error::{DomainError, FitError};
use crate::float_trait::Float;
use crate::gaussian::gaussian;
use crate::mixture::{FitResult, GaussianComponent, GaussianMixture};
use crate::nnls::nnls;

use itertools::Itertools;
use ndarray::{Array1, Array2, ArrayRef1, s};

/// Fits a radial profile with a non-negative sum of Gaussian basis functions
///
/// Candidate widths are log-spaced strictly inside `[radii[0], radii[last] / 2]`
/// and the amplitudes come from a non-negative least-squares solve of the
/// resulting design matrix. A failed solve retries the whole procedure with one
/// basis function fewer; only running out of basis sizes is an error.
///
/// `radii` must be finite, positive and strictly increasing, `values` finite
/// and of the same length, `max_components` at least one; anything else is a
/// [DomainError]. Amplitudes of exactly zero are kept in the returned mixture.
pub fn fit<T>(
    radii: &ArrayRef1<T>,
    values: &ArrayRef1<T>,
    max_components: usize,
) -> Result<FitResult<T>, FitError>
where
    T: Float,
{
    validate(radii, values, max_components)?;
    let values = values.to_owned();
    for n in (1..=max_components).rev() {
        let sigmas = basis_widths(radii, n);
        let design = design_matrix(radii, &sigmas);
        if let Some((amplitudes, residual_norm)) = nnls(&design, &values) {
            let mixture: GaussianMixture<_> = amplitudes
                .iter()
                .zip(sigmas.iter())
                .map(|(&amplitude, &sigma)| GaussianComponent { amplitude, sigma })
                .collect();
            return Ok(FitResult {
                mixture,
                basis_count_used: n,
                converged: true,
                residual_norm,
            });
        }
    }
    Err(FitError::FittingExhausted { max_components })
}

fn validate<T>(
    radii: &ArrayRef1<T>,
    values: &ArrayRef1<T>,
    max_components: usize,
) -> Result<(), DomainError>
where
    T: Float,
{
    if max_components == 0 {
        return Err(DomainError::NoComponentsRequested);
    }
    if radii.len() != values.len() {
        return Err(DomainError::LengthMismatch {
            radii: radii.len(),
            values: values.len(),
        });
    }
    if radii.is_empty() {
        return Err(DomainError::EmptySample);
    }
    if let Some(index) = radii.iter().position(|&r| !(r.is_finite() && r > T::zero())) {
        return Err(DomainError::NonPositiveRadius { index });
    }
    if let Some((index, _)) = radii
        .iter()
        .tuple_windows()
        .enumerate()
        .find(|&(_, (left, right))| right <= left)
    {
        return Err(DomainError::NonMonotonicRadii { index: index + 1 });
    }
    if let Some(index) = values.iter().position(|&v| !v.is_finite()) {
        return Err(DomainError::NonFiniteValue { index });
    }
    Ok(())
}

/// `n` log-spaced candidate widths strictly inside `[radii[0], radii[last] / 2]`:
/// `n + 2` log-spaced anchors with both endpoints discarded, which keeps the
/// narrowest and widest basis functions away from the sampling boundary
fn basis_widths<T>(radii: &ArrayRef1<T>, n: usize) -> Array1<T>
where
    T: Float,
{
    let lg_narrow = radii[0].log10();
    let lg_wide = (radii[radii.len() - 1] / T::two()).log10();
    let anchors = Array1::logspace(T::ten(), lg_narrow, lg_wide, n + 2);
    anchors.slice(s![1..=n]).to_owned()
}

/// One unit-amplitude basis function per column, evaluated at all radii
fn design_matrix<T>(radii: &ArrayRef1<T>, sigmas: &ArrayRef1<T>) -> Array2<T>
where
    T: Float,
{
    let mut design = Array2::zeros((radii.len(), sigmas.len()));
    for (j, &sigma) in sigmas.iter().enumerate() {
        design
            .column_mut(j)
            .assign(&gaussian(radii, sigma, T::one()));
    }
    design
}
