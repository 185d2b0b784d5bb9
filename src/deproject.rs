use crate::float_trait::Float;
use crate::mixture::{DeprojectedMixture, GaussianComponent, GaussianMixture};

/// Deprojects a 2D Gaussian sum into its spherically symmetric 3D counterpart
///
/// Closed-form Abel inversion for a circular Gaussian: each width is kept and
/// each amplitude is rescaled,
/// $$
/// A_\mathrm{3D} = \frac{A_\mathrm{2D}}{\sigma\sqrt{2\pi}}.
/// $$
/// Exact for any mixture with positive sigmas, which [`fit`](crate::fit)
/// guarantees by construction.
pub fn deproject<T>(mixture: &GaussianMixture<T>) -> DeprojectedMixture<T>
where
    T: Float,
{
    mixture
        .components()
        .iter()
        .map(|component| GaussianComponent {
            amplitude: component.amplitude / (component.sigma * (T::two() * T::PI()).sqrt()),
            sigma: component.sigma,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reprojection_restores_amplitudes() {
        let mixture = GaussianMixture::new(vec![
            GaussianComponent {
                amplitude: 2.5_f64,
                sigma: 0.3,
            },
            GaussianComponent {
                amplitude: 1e-7,
                sigma: 42.0,
            },
        ]);
        let deprojected = deproject(&mixture);
        assert_eq!(deprojected.len(), mixture.len());
        for (original, volume) in mixture
            .components()
            .iter()
            .zip(deprojected.components().iter())
        {
            assert_eq!(volume.sigma, original.sigma);
            let reprojected =
                volume.amplitude * volume.sigma * (2.0 * std::f64::consts::PI).sqrt();
            assert_relative_eq!(
                reprojected,
                original.amplitude,
                max_relative = 4.0 * f64::EPSILON
            );
        }
    }

    #[test]
    fn zero_amplitude_stays_zero() {
        let mixture = GaussianMixture::new(vec![GaussianComponent {
            amplitude: 0.0_f64,
            sigma: 1.0,
        }]);
        let deprojected = mixture.deproject();
        assert_eq!(deprojected.components()[0].amplitude, 0.0);
    }

    #[test]
    fn known_rescaling_factor() {
        // unit-amplitude, unit-width component: 1 / sqrt(2 pi)
        let mixture = GaussianMixture::new(vec![GaussianComponent {
            amplitude: 1.0_f64,
            sigma: 1.0,
        }]);
        let deprojected = deproject(&mixture);
        assert_relative_eq!(
            deprojected.components()[0].amplitude,
            (2.0 * std::f64::consts::PI).sqrt().recip(),
            max_relative = f64::EPSILON
        );
    }
}
