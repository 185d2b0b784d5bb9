use crate::float_trait::Float;

use ndarray::{Array1, ArrayRef1};

/// Value of a 2D-normalized circular Gaussian along the radial coordinate
///
/// $$
/// f(r) = \frac{A}{2\pi\sigma^2} \exp\left(-\frac{r^2}{2\sigma^2}\right)
/// $$
///
/// Any finite `r` and finite `sigma > 0` give a finite value, underflowing to
/// zero far in the tail.
#[inline]
pub fn gaussian_value<T>(r: T, sigma: T, amp: T) -> T
where
    T: Float,
{
    let c = amp / (T::two() * T::PI() * sigma.powi(2));
    c * T::exp(-T::half() * (r / sigma).powi(2))
}

/// [gaussian_value] evaluated over a whole array of radii, order-preserving
pub fn gaussian<T>(r: &ArrayRef1<T>, sigma: T, amp: T) -> Array1<T>
where
    T: Float,
{
    r.mapv(|x| gaussian_value(x, sigma, amp))
}

#[cfg(test)]
mod tests {
    use super::*;

    use light_curve_common::{all_close, linspace};
    use ndarray::Array1;

    #[test]
    fn central_value_is_normalization() {
        let sigma = 2.0_f64;
        let amp = 3.0;
        let desired = amp / (2.0 * std::f64::consts::PI * sigma.powi(2));
        assert!((gaussian_value(0.0, sigma, amp) - desired).abs() < 1e-15);
    }

    #[test]
    fn vectorized_matches_scalar() {
        let r = Array1::from(linspace(0.0_f64, 5.0, 33));
        let actual = gaussian(&r, 0.7, 1.5);
        let desired: Vec<_> = r.iter().map(|&x| gaussian_value(x, 0.7, 1.5)).collect();
        all_close(actual.as_slice().unwrap(), &desired, 1e-15);
    }

    #[test]
    fn far_tail_underflows_to_zero() {
        let value = gaussian_value(1e8_f64, 1.0, 1.0);
        assert!(value.is_finite());
        assert_eq!(value, 0.0);
    }

    #[test]
    fn f32_evaluation() {
        let r = Array1::from(vec![0.0_f32, 1.0, 2.0]);
        let values = gaussian(&r, 1.0_f32, 1.0);
        assert!(values.iter().all(|v| v.is_finite()));
        assert!(values[0] > values[1] && values[1] > values[2]);
    }
}
