//! Domain error for degenerate geometric input

use std::fmt;

/// Why a `checked_*` constructor refused its input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// `right == left`
    ZeroWidth,
    /// `top == bottom`
    ZeroHeight,
    /// `far == near`
    ZeroDepth,
    /// Perspective near plane at zero collapses the frustum to a point
    ZeroNear,
    /// Aspect ratio was zero, negative or NaN
    NonPositiveAspect(f32),
    /// Rotation axis has zero length
    ZeroAxis,
    /// An input was NaN or infinite
    NonFinite(&'static str),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::ZeroWidth => write!(f, "Degenerate frustum: right equals left"),
            DomainError::ZeroHeight => write!(f, "Degenerate frustum: top equals bottom"),
            DomainError::ZeroDepth => write!(f, "Degenerate frustum: far plane equals near plane"),
            DomainError::ZeroNear => write!(f, "Degenerate perspective: near plane is zero"),
            DomainError::NonPositiveAspect(aspect) => {
                write!(f, "Aspect ratio must be positive, got {}", aspect)
            }
            DomainError::ZeroAxis => write!(f, "Rotation axis has zero length"),
            DomainError::NonFinite(what) => write!(f, "Non-finite value for {}", what),
        }
    }
}

impl std::error::Error for DomainError {}
