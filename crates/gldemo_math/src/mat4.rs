//! 4x4 Matrix utilities for projection and model-view transforms
//!
//! Matrices are stored row-major: index `i * 4 + j` is row `i`, column `j`.
//! Construction and multiplication use this layout so the formulas read
//! like their textbook derivations. [`flatten`] transposes into the
//! column-major order expected by `uniformMatrix4fv` with transpose = false.
//!
//! The plain constructors never fail. Degenerate input (equal near and far
//! planes, a zero-width frustum) lets NaN/Inf propagate through the closed
//! form. The `checked_*` variants reject the same input with a
//! [`DomainError`] instead.

use crate::{DomainError, Vec3};

/// 4x4 matrix type (row-major)
pub type Mat4 = [f32; 16];

/// Identity matrix
#[rustfmt::skip]
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// Return the identity matrix
#[inline]
pub fn identity() -> Mat4 {
    IDENTITY
}

/// Create a pure translation by `v`
///
/// The offset lives in column 3 (indices 3, 7 and 11), which is what
/// [`mul`] expects for a transform applied to column vectors.
pub fn translation(v: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3] = v.x;
    m[7] = v.y;
    m[11] = v.z;
    m
}

/// Post-multiply `m` by a translation: `mul(m, translation(v))`
#[inline]
pub fn translate(m: Mat4, v: Vec3) -> Mat4 {
    mul(m, translation(v))
}

/// Create a rotation of `angle` radians around `axis`
///
/// The axis is used exactly as given and is NOT normalized. A non-unit axis
/// yields a matrix that also scales and shears; normalize with
/// [`Vec3::normalized`] first if that is not wanted.
///
/// # Example
/// ```
/// use gldemo_math::{rotation, transform_point, Vec3};
/// let m = rotation(std::f32::consts::FRAC_PI_2, Vec3::Z);
/// let p = transform_point(m, Vec3::X);
/// assert!((p.y - 1.0).abs() < 1e-6);
/// ```
#[rustfmt::skip]
pub fn rotation(angle: f32, axis: Vec3) -> Mat4 {
    let (x, y, z) = (axis.x, axis.y, axis.z);
    let s = angle.sin();
    let c = angle.cos();
    let t = 1.0 - c;

    [
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    ]
}

/// Post-multiply `m` by a rotation: `mul(m, rotation(angle, axis))`
#[inline]
pub fn rotate(m: Mat4, angle: f32, axis: Vec3) -> Mat4 {
    mul(m, rotation(angle, axis))
}

/// Off-axis perspective projection (the `glFrustum` matrix)
///
/// ```text
/// X  0  A  0      X = 2n/(r-l)   A = (r+l)/(r-l)
/// 0  Y  B  0      Y = 2n/(t-b)   B = (t+b)/(t-b)
/// 0  0  C  D      C = -(f+n)/(f-n)
/// 0  0 -1  0      D = -2fn/(f-n)
/// ```
#[rustfmt::skip]
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let x = 2.0 * near / (right - left);
    let y = 2.0 * near / (top - bottom);
    let a = (right + left) / (right - left);
    let b = (top + bottom) / (top - bottom);
    let c = -(far + near) / (far - near);
    let d = -2.0 * far * near / (far - near);

    [
        x,   0.0, a,    0.0,
        0.0, y,   b,    0.0,
        0.0, 0.0, c,    d,
        0.0, 0.0, -1.0, 0.0,
    ]
}

/// Symmetric perspective projection (the `gluPerspective` matrix)
///
/// `fov_y` is the full vertical field of view in degrees.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let (xmin, xmax, ymin, ymax) = perspective_bounds(fov_y, aspect, near);
    frustum(xmin, xmax, ymin, ymax, near, far)
}

/// Near-plane bounds `(xmin, xmax, ymin, ymax)` for a symmetric frustum
fn perspective_bounds(fov_y: f32, aspect: f32, near: f32) -> (f32, f32, f32, f32) {
    // Half-angle tangent in f64, then narrowed
    let half_tan = (fov_y as f64 * std::f64::consts::PI / 360.0).tan() as f32;
    let ymax = near * half_tan;
    let ymin = -ymax;
    (ymin * aspect, ymax * aspect, ymin, ymax)
}

/// [`frustum`] that rejects zero-width, zero-height or zero-depth volumes
pub fn checked_frustum(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, DomainError> {
    if ![left, right, bottom, top, near, far].iter().all(|v| v.is_finite()) {
        return Err(DomainError::NonFinite("frustum bounds"));
    }
    if right == left {
        return Err(DomainError::ZeroWidth);
    }
    if top == bottom {
        return Err(DomainError::ZeroHeight);
    }
    if far == near {
        return Err(DomainError::ZeroDepth);
    }
    Ok(frustum(left, right, bottom, top, near, far))
}

/// [`perspective`] that rejects a non-positive aspect ratio or equal planes
///
/// A zero near plane is reported as [`DomainError::ZeroNear`]. A zero field
/// of view collapses the frustum and surfaces as [`DomainError::ZeroHeight`].
pub fn checked_perspective(
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, DomainError> {
    // Written so NaN fails too
    if !(aspect > 0.0) {
        return Err(DomainError::NonPositiveAspect(aspect));
    }
    if !fov_y.is_finite() {
        return Err(DomainError::NonFinite("field of view"));
    }
    if far == near {
        return Err(DomainError::ZeroDepth);
    }
    if near == 0.0 {
        return Err(DomainError::ZeroNear);
    }
    let (xmin, xmax, ymin, ymax) = perspective_bounds(fov_y, aspect, near);
    if ymax == ymin {
        return Err(DomainError::ZeroHeight);
    }
    checked_frustum(xmin, xmax, ymin, ymax, near, far)
}

/// [`rotation`] that rejects a zero-length axis or non-finite angle
///
/// A non-unit axis is still accepted and used un-normalized.
pub fn checked_rotation(angle: f32, axis: Vec3) -> Result<Mat4, DomainError> {
    if !angle.is_finite() {
        return Err(DomainError::NonFinite("rotation angle"));
    }
    if !axis.length_squared().is_finite() {
        return Err(DomainError::NonFinite("rotation axis"));
    }
    if axis.length_squared() == 0.0 {
        return Err(DomainError::ZeroAxis);
    }
    Ok(rotation(angle, axis))
}

/// Multiply two 4x4 matrices: result = a * b
///
/// `result[i][j] = sum over k of a[i][k] * b[k][j]`. Applied to a column
/// vector, `b` acts first, so `mul(model_view, transform)` applies
/// `transform` in the model's local space.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [0.0f32; 16];

    for i in 0..4 {
        for j in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[i * 4 + k] * b[k * 4 + j];
            }
            result[i * 4 + j] = sum;
        }
    }

    result
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    let mut result = [0.0f32; 16];
    for row in 0..4 {
        for col in 0..4 {
            result[row * 4 + col] = m[col * 4 + row];
        }
    }
    result
}

/// Reorder into column-major layout for upload to the graphics API
///
/// `out[row * 4 + col] = m[col * 4 + row]`. This is the only place the
/// row-major storage meets the column-major external layout.
#[inline]
pub fn flatten(m: Mat4) -> [f32; 16] {
    transpose(m)
}

/// Transform the point `(v, 1)` by `m`, dropping w
///
/// No perspective divide is performed.
pub fn transform_point(m: Mat4, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3],
        m[4] * v.x + m[5] * v.y + m[6] * v.z + m[7],
        m[8] * v.x + m[9] * v.y + m[10] * v.z + m[11],
    )
}
