//! Model-view matrix with an explicit save/restore stack
//!
//! A `ModelView` is owned by the render loop and threaded through each
//! frame. Every transform post-multiplies the current matrix, so later
//! calls act in the local space set up by earlier ones.

use gldemo_math::{self as math, Mat4, Vec3};

use crate::SceneError;

/// Current model-view matrix plus a LIFO stack of saved matrices
#[derive(Clone, Debug)]
pub struct ModelView {
    current: Mat4,
    stack: Vec<Mat4>,
}

impl Default for ModelView {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelView {
    /// Start at the identity with an empty stack
    pub fn new() -> Self {
        Self {
            current: math::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// The current matrix
    #[inline]
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Number of saved matrices
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Reset the current matrix to identity. The stack is left alone.
    pub fn load_identity(&mut self) {
        self.current = math::IDENTITY;
    }

    /// current = current * m
    pub fn mult_matrix(&mut self, m: Mat4) {
        self.current = math::mul(self.current, m);
    }

    /// Apply a translation in local space
    pub fn translate(&mut self, offset: Vec3) {
        self.mult_matrix(math::translation(offset));
    }

    /// Apply a rotation of `degrees` around `axis` in local space
    ///
    /// The axis is passed to [`math::rotation`] as-is.
    pub fn rotate_degrees(&mut self, degrees: f32, axis: Vec3) {
        self.mult_matrix(math::rotation(degrees_to_radians(degrees), axis));
    }

    /// Like [`rotate_degrees`](Self::rotate_degrees) but rejects a zero axis
    pub fn try_rotate_degrees(&mut self, degrees: f32, axis: Vec3) -> Result<(), SceneError> {
        let m = math::checked_rotation(degrees_to_radians(degrees), axis).map_err(|e| {
            log::warn!("Rejected rotation of {} degrees around {:?}: {}", degrees, axis, e);
            e
        })?;
        self.mult_matrix(m);
        Ok(())
    }

    /// Save a copy of the current matrix
    pub fn push(&mut self) {
        self.stack.push(self.current);
        log::debug!("Pushed model-view matrix (depth {})", self.stack.len());
    }

    /// Save `m` and make it the current matrix
    pub fn push_matrix(&mut self, m: Mat4) {
        self.stack.push(m);
        self.current = m;
        log::debug!("Pushed explicit model-view matrix (depth {})", self.stack.len());
    }

    /// Restore the most recently saved matrix and return it
    pub fn pop(&mut self) -> Result<Mat4, SceneError> {
        let m = self.stack.pop().ok_or(SceneError::EmptyMatrixStack)?;
        self.current = m;
        log::debug!("Popped model-view matrix (depth {})", self.stack.len());
        Ok(m)
    }
}

/// Degrees to radians, converted in f64 and narrowed
fn degrees_to_radians(degrees: f32) -> f32 {
    (degrees as f64 * std::f64::consts::PI / 180.0) as f32
}
