//! Matrix Mathematics Library
//!
//! Pure, stateless helpers for building the projection and model-view
//! matrices consumed by a shader pipeline.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector used for translation offsets and rotation axes
//! - [`Mat4`] - 4x4 matrix stored row-major as 16 floats
//! - [`DomainError`] - Rejection of degenerate geometric input by the
//!   `checked_*` constructors
//!
//! Matrices are built and multiplied in row-major order. [`flatten`] is the
//! single point where they are transposed into the column-major layout a
//! graphics API expects.

mod vec3;
mod error;
pub mod mat4;

pub use vec3::Vec3;
pub use error::DomainError;
pub use mat4::{
    Mat4, IDENTITY, identity, translation, translate, rotation, rotate, frustum, perspective,
    checked_frustum, checked_perspective, checked_rotation, mul, transpose, flatten,
    transform_point,
};
