//! Matrix uniforms in upload layout
//!
//! Both matrices are stored flattened (column-major), so the consumer
//! uploads them with the transpose flag off.

use bytemuck::{Pod, Zeroable};
use gldemo_math::{self as math, Mat4};

/// Uniform name for the projection matrix in the demo shaders
pub const PROJECTION_UNIFORM: &str = "uPMatrix";

/// Uniform name for the model-view matrix in the demo shaders
pub const MODEL_VIEW_UNIFORM: &str = "uMVMatrix";

/// Projection and model-view matrices, column-major
/// Layout: 128 bytes total
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MatrixUniforms {
    /// Flattened projection matrix (64 bytes)
    pub projection: [f32; 16],
    /// Flattened model-view matrix (64 bytes)
    pub model_view: [f32; 16],
}

impl Default for MatrixUniforms {
    fn default() -> Self {
        Self::new(math::IDENTITY, math::IDENTITY)
    }
}

impl MatrixUniforms {
    /// Flatten row-major matrices into upload order
    pub fn new(projection: Mat4, model_view: Mat4) -> Self {
        Self {
            projection: math::flatten(projection),
            model_view: math::flatten(model_view),
        }
    }

    /// `(uniform name, column-major values)` pairs, in upload order
    pub fn named(&self) -> [(&'static str, &[f32; 16]); 2] {
        [
            (PROJECTION_UNIFORM, &self.projection),
            (MODEL_VIEW_UNIFORM, &self.model_view),
        ]
    }

    /// Raw bytes for a uniform buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
