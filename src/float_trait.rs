use conv::prelude::*;
use ndarray::NdFloat;

/// Floating-point number trait, implemented for [f32] and [f64] only
pub trait Float:
    'static + NdFloat + num_traits::FloatConst + ValueFrom<usize> + Send + Sync
{
    fn half() -> Self;
    fn two() -> Self;
    fn ten() -> Self;
}

impl Float for f32 {
    #[inline]
    fn half() -> Self {
        0.5
    }

    #[inline]
    fn two() -> Self {
        2.0
    }

    #[inline]
    fn ten() -> Self {
        10.0
    }
}

impl Float for f64 {
    #[inline]
    fn half() -> Self {
        0.5
    }

    #[inline]
    fn two() -> Self {
        2.0
    }

    #[inline]
    fn ten() -> Self {
        10.0
    }
}
