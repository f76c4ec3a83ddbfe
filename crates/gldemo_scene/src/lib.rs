//! Scene-side collaborator for the gldemo matrix library
//!
//! The math crate is stateless. This crate owns everything a render loop
//! threads from frame to frame:
//!
//! - [`ModelView`] - Current model-view matrix plus an explicit save/restore stack
//! - [`Camera`] - Perspective parameters turned into a projection matrix
//! - [`Mesh`] - Vertex, texture-coordinate and index data for the demos
//! - [`MatrixUniforms`] - Flattened matrices laid out for upload
//! - [`Demo`] - A scene that turns camera + angle into per-frame uniforms

mod error;
mod model_view;
mod camera;
pub mod mesh;
pub mod uniforms;
pub mod demo;

pub use error::SceneError;
pub use model_view::ModelView;
pub use camera::Camera;
pub use mesh::{Mesh, Primitive};
pub use uniforms::{MatrixUniforms, MODEL_VIEW_UNIFORM, PROJECTION_UNIFORM};
pub use demo::{CubeDemo, Demo, DemoKind, SquareDemo};

// Re-export commonly used math types for convenience
pub use gldemo_math::{DomainError, Mat4, Vec3};
