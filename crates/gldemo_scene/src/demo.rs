//! Demo scenes
//!
//! A demo turns the camera and a caller-supplied rotation angle into the
//! matrices for one frame. The angle is an input; demos never read a clock.

use gldemo_math::Vec3;
use serde::{Serialize, Deserialize};

use crate::{Camera, MatrixUniforms, Mesh, ModelView, SceneError};

/// A scene that can produce per-frame matrix uniforms
pub trait Demo {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Geometry drawn by this demo
    fn mesh(&self) -> Mesh;

    /// Build the uniforms for a frame with the object rotated by
    /// `angle_degrees`
    fn frame(&self, camera: &Camera, angle_degrees: f32) -> Result<MatrixUniforms, SceneError>;
}

/// Default distance between the camera and the demo object
pub const DEFAULT_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -6.0);

/// Default spin axis for the cube (deliberately not unit length)
pub const DEFAULT_CUBE_AXIS: Vec3 = Vec3::new(1.0, 0.0, 1.0);

/// A flat square placed in front of the camera
#[derive(Clone, Copy, Debug)]
pub struct SquareDemo {
    pub offset: Vec3,
}

impl Default for SquareDemo {
    fn default() -> Self {
        Self { offset: DEFAULT_OFFSET }
    }
}

impl Demo for SquareDemo {
    fn name(&self) -> &'static str {
        "square"
    }

    fn mesh(&self) -> Mesh {
        Mesh::square()
    }

    fn frame(&self, camera: &Camera, _angle_degrees: f32) -> Result<MatrixUniforms, SceneError> {
        let projection = camera.try_projection()?;

        let mut model_view = ModelView::new();
        model_view.translate(self.offset);

        Ok(MatrixUniforms::new(projection, model_view.current()))
    }
}

/// A textured cube spinning around `axis`
///
/// The axis goes to the rotation constructor un-normalized.
#[derive(Clone, Copy, Debug)]
pub struct CubeDemo {
    pub offset: Vec3,
    pub axis: Vec3,
}

impl Default for CubeDemo {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            axis: DEFAULT_CUBE_AXIS,
        }
    }
}

impl Demo for CubeDemo {
    fn name(&self) -> &'static str {
        "cube"
    }

    fn mesh(&self) -> Mesh {
        Mesh::textured_cube()
    }

    fn frame(&self, camera: &Camera, angle_degrees: f32) -> Result<MatrixUniforms, SceneError> {
        let projection = camera.try_projection()?;

        let mut model_view = ModelView::new();
        model_view.translate(self.offset);

        model_view.push();
        model_view.try_rotate_degrees(angle_degrees, self.axis)?;
        let uniforms = MatrixUniforms::new(projection, model_view.current());
        model_view.pop()?;

        log::debug!("Cube frame at {} degrees", angle_degrees);
        Ok(uniforms)
    }
}

/// Which demo to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    Square,
    #[default]
    Cube,
}

impl DemoKind {
    /// Build the demo, placing the object at `offset`. `axis` is only used
    /// by the cube.
    pub fn build(self, offset: Vec3, axis: Vec3) -> Box<dyn Demo> {
        match self {
            DemoKind::Square => Box::new(SquareDemo { offset }),
            DemoKind::Cube => Box::new(CubeDemo { offset, axis }),
        }
    }
}
