//! Scene error types

use std::fmt;

use gldemo_math::DomainError;

/// Error type for per-frame scene construction
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// `pop` was called with nothing saved
    EmptyMatrixStack,
    /// Camera or transform parameters were degenerate
    Domain(DomainError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::EmptyMatrixStack => write!(f, "Can't pop from an empty matrix stack"),
            SceneError::Domain(err) => write!(f, "Invalid scene parameters: {}", err),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::EmptyMatrixStack => None,
            SceneError::Domain(err) => Some(err),
        }
    }
}

impl From<DomainError> for SceneError {
    fn from(err: DomainError) -> Self {
        SceneError::Domain(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_empty_stack_display() {
        let msg = format!("{}", SceneError::EmptyMatrixStack);
        assert!(msg.contains("empty matrix stack"));
    }

    #[test]
    fn test_domain_display() {
        let err = SceneError::Domain(DomainError::ZeroDepth);
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid scene parameters"));
        assert!(msg.contains("far plane"));
    }

    #[test]
    fn test_from_domain_error() {
        let err: SceneError = DomainError::ZeroAxis.into();
        assert_eq!(err, SceneError::Domain(DomainError::ZeroAxis));
    }

    #[test]
    fn test_error_source() {
        assert!(SceneError::EmptyMatrixStack.source().is_none());
        assert!(SceneError::Domain(DomainError::ZeroWidth).source().is_some());
    }
}
