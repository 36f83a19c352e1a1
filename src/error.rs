use thiserror::Error;

/// Top-level error type for polygon reconstruction.
///
/// The two variants are the two ways a reconstruction can fail: the
/// descriptor itself is malformed, or it is well-formed but no closing
/// vertex satisfies both distance constraints.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolycloseError {
    #[error(transparent)]
    InvalidDescriptor(#[from] DescriptorError),

    #[error(transparent)]
    Unsolvable(#[from] UnsolvableError),
}

impl PolycloseError {
    /// Returns `true` if the descriptor was rejected before any geometry ran.
    #[must_use]
    pub fn is_invalid_descriptor(&self) -> bool {
        matches!(self, Self::InvalidDescriptor(_))
    }

    /// Returns `true` if the descriptor was valid but could not be closed.
    #[must_use]
    pub fn is_unsolvable(&self) -> bool {
        matches!(self, Self::Unsolvable(_))
    }
}

/// Structural problems with a polygon descriptor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptorError {
    #[error("{sides} sides require {expected} angles, got {found}")]
    AngleCount {
        sides: usize,
        expected: usize,
        found: usize,
    },

    #[error("angle {index} is not finite ({value})")]
    NonFiniteAngle { index: usize, value: f64 },

    #[error("side {index} is negative ({value})")]
    NegativeSide { index: usize, value: f64 },

    #[error("side {index} is not finite ({value})")]
    NonFiniteSide { index: usize, value: f64 },
}

/// A valid descriptor that admits no closing vertex.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnsolvableError {
    #[error("direction at vertex {vertex} is undefined after a zero-length side")]
    UndefinedDirection { vertex: usize },

    #[error("first and penultimate vertices coincide but closing sides differ ({first} != {penultimate})")]
    ContradictoryRadii { first: f64, penultimate: f64 },

    #[error("closing sides {first} and {penultimate} cannot span a gap of {distance}")]
    NoClosure {
        distance: f64,
        first: f64,
        penultimate: f64,
    },
}

/// Convenience type alias for results using [`PolycloseError`].
pub type Result<T> = std::result::Result<T, PolycloseError>;
