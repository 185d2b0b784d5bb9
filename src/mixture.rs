use crate::deproject::deproject;
use crate::float_trait::Float;
use crate::gaussian::gaussian;

use ndarray::{Array1, ArrayRef1};
use serde::{Deserialize, Serialize};

/// One term of a Gaussian-sum profile representation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaussianComponent<T> {
    pub amplitude: T,
    pub sigma: T,
}

macro_rules! mixture_methods {
    ($name: ident) => {
        impl<T> $name<T>
        where
            T: Float,
        {
            pub fn new(components: Vec<GaussianComponent<T>>) -> Self {
                Self(components)
            }

            pub fn components(&self) -> &[GaussianComponent<T>] {
                &self.0
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Sum of all components evaluated at the given radii
            pub fn evaluate(&self, r: &ArrayRef1<T>) -> Array1<T> {
                self.0.iter().fold(Array1::zeros(r.len()), |f, component| {
                    f + gaussian(r, component.sigma, component.amplitude)
                })
            }
        }

        impl<T> FromIterator<GaussianComponent<T>> for $name<T>
        where
            T: Float,
        {
            fn from_iter<I: IntoIterator<Item = GaussianComponent<T>>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }
    };
}

/// Projected (2D) radial profile represented as a sum of circular Gaussians
///
/// Component order carries no meaning for the represented function, but each
/// amplitude belongs to the sigma it is stored with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaussianMixture<T>(Vec<GaussianComponent<T>>);

mixture_methods!(GaussianMixture);

impl<T> GaussianMixture<T>
where
    T: Float,
{
    /// Values of each component at the given radii, in component order
    pub fn evaluate_components(&self, r: &ArrayRef1<T>) -> Vec<Array1<T>> {
        self.0
            .iter()
            .map(|component| gaussian(r, component.sigma, component.amplitude))
            .collect()
    }

    /// See [deproject](crate::deproject)
    pub fn deproject(&self) -> DeprojectedMixture<T> {
        deproject(self)
    }
}

/// Spherically symmetric 3D Gaussian sum obtained by deprojecting a [GaussianMixture]
///
/// Amplitudes denote volume density normalizations; sigmas are numerically the
/// same as in the projected mixture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeprojectedMixture<T>(Vec<GaussianComponent<T>>);

mixture_methods!(DeprojectedMixture);

/// Successful output of [`fit`](crate::fit)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitResult<T> {
    /// Fitted non-negative Gaussian sum, one entry per basis width
    pub mixture: GaussianMixture<T>,
    /// Number of candidate widths of the successful attempt, never above the
    /// requested maximum
    pub basis_count_used: usize,
    /// Always true for a returned result, failure raises instead
    pub converged: bool,
    /// Euclidean norm of the non-negative least-squares residual
    pub residual_norm: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaussian::gaussian_value;

    use light_curve_common::{all_close, linspace};
    use ndarray::Array1;

    #[test]
    fn evaluate_sums_components() {
        let mixture = GaussianMixture::new(vec![
            GaussianComponent {
                amplitude: 1.0_f64,
                sigma: 0.5,
            },
            GaussianComponent {
                amplitude: 0.25,
                sigma: 2.0,
            },
        ]);
        let r = Array1::from(linspace(0.0_f64, 4.0, 17));
        let actual = mixture.evaluate(&r);
        let desired: Vec<_> = r
            .iter()
            .map(|&x| gaussian_value(x, 0.5, 1.0) + gaussian_value(x, 2.0, 0.25))
            .collect();
        all_close(actual.as_slice().unwrap(), &desired, 1e-15);
    }

    #[test]
    fn component_split_sums_to_evaluate() {
        let mixture = GaussianMixture::new(vec![
            GaussianComponent {
                amplitude: 0.3_f64,
                sigma: 0.2,
            },
            GaussianComponent {
                amplitude: 1.7,
                sigma: 1.1,
            },
            GaussianComponent {
                amplitude: 0.0,
                sigma: 3.0,
            },
        ]);
        let r = Array1::from(linspace(0.1_f64, 3.0, 11));
        let split = mixture.evaluate_components(&r);
        assert_eq!(split.len(), mixture.len());
        let summed = split
            .into_iter()
            .fold(Array1::<f64>::zeros(r.len()), |f, term| f + term);
        all_close(
            summed.as_slice().unwrap(),
            mixture.evaluate(&r).as_slice().unwrap(),
            1e-15,
        );
    }

    #[test]
    fn empty_mixture_evaluates_to_zero() {
        let mixture = GaussianMixture::<f64>::new(vec![]);
        assert!(mixture.is_empty());
        let r = Array1::from(vec![0.5, 1.0]);
        assert_eq!(mixture.evaluate(&r), Array1::zeros(2));
    }
}
