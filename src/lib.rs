#![doc = include_str!("../README.md")]

mod deproject;
pub use deproject::deproject;

mod error;
pub use error::{DomainError, FitError};

mod fit;
pub use fit::fit;

mod float_trait;
pub use float_trait::Float;

mod gaussian;
pub use gaussian::{gaussian, gaussian_value};

mod mixture;
pub use mixture::{DeprojectedMixture, FitResult, GaussianComponent, GaussianMixture};

mod nnls;

pub use ndarray;
