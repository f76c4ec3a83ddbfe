//! Perspective camera parameters

use gldemo_math::{self as math, Mat4};

use crate::SceneError;

/// Camera parameters for a symmetric perspective projection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees
    pub fov_y: f32,
    /// Width / height
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y: 45.0,
            aspect: 640.0 / 480.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Create a camera from explicit parameters
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self { fov_y, aspect, near, far }
    }

    /// Projection matrix; degenerate parameters yield NaN/Inf entries
    pub fn projection(&self) -> Mat4 {
        math::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Projection matrix, rejecting degenerate parameters
    pub fn try_projection(&self) -> Result<Mat4, SceneError> {
        math::checked_perspective(self.fov_y, self.aspect, self.near, self.far).map_err(|e| {
            log::warn!("Rejected camera {:?}: {}", self, e);
            SceneError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_demo_setup() {
        let camera = Camera::default();
        assert_eq!(camera.fov_y, 45.0);
        assert_eq!(camera.aspect, 640.0 / 480.0);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 100.0);
    }

    #[test]
    fn test_projection_matches_perspective() {
        let camera = Camera::new(90.0, 1.0, 1.0, 100.0);
        assert_eq!(camera.projection(), math::perspective(90.0, 1.0, 1.0, 100.0));
        assert_eq!(camera.try_projection(), Ok(camera.projection()));
    }

    #[test]
    fn test_try_projection_rejects_degenerate() {
        let camera = Camera::new(45.0, 1.0, 10.0, 10.0);
        assert_eq!(
            camera.try_projection(),
            Err(SceneError::Domain(math::DomainError::ZeroDepth))
        );
        assert!(!camera.projection()[10].is_finite());

        let camera = Camera::new(45.0, 0.0, 0.1, 100.0);
        assert!(matches!(
            camera.try_projection(),
            Err(SceneError::Domain(math::DomainError::NonPositiveAspect(_)))
        ));

        let camera = Camera::new(45.0, 1.0, 0.0, 100.0);
        assert_eq!(
            camera.try_projection(),
            Err(SceneError::Domain(math::DomainError::ZeroNear))
        );
    }
}
