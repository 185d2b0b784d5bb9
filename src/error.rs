/// Invalid input rejected by [`fit`](crate::fit) before any numerical work
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("radii length {radii} differs from values length {values}")]
    LengthMismatch { radii: usize, values: usize },

    #[error("radial sample is empty")]
    EmptySample,

    #[error("requested number of components is zero")]
    NoComponentsRequested,

    #[error("radius at index {index} is not a finite positive number")]
    NonPositiveRadius { index: usize },

    #[error("radii are not strictly increasing at index {index}")]
    NonMonotonicRadii { index: usize },

    #[error("profile value at index {index} is not finite")]
    NonFiniteValue { index: usize },
}

/// Error returned from [`fit`](crate::fit)
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FitError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(
        "no non-negative least-squares solution found for any basis size from {max_components} down to one"
    )]
    FittingExhausted { max_components: usize },
}
