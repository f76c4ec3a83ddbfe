//! Integration tests for per-frame matrix construction
//!
//! These tests drive the scene crate the way a render loop would:
//! 1. Build the projection from camera parameters
//! 2. Compose the model-view matrix with translate/rotate and the stack
//! 3. Flatten both into the uniform layout and check what a shader would see

use gldemo_math::{self as math, Vec3};
use gldemo_scene::{
    Camera, CubeDemo, Demo, DemoKind, MatrixUniforms, ModelView, SceneError, SquareDemo,
};
use gldemo_scene::demo::{DEFAULT_CUBE_AXIS, DEFAULT_OFFSET};

const EPSILON: f32 = 0.0001;

/// Column-major matrix times column vector (x, y, z, 1), as a vertex shader computes it
fn apply_column_major(m: &[f32; 16], p: [f32; 3]) -> [f32; 4] {
    let v = [p[0], p[1], p[2], 1.0];
    let mut out = [0.0; 4];
    for (row, slot) in out.iter_mut().enumerate() {
        *slot = (0..4).map(|col| m[col * 4 + row] * v[col]).sum();
    }
    out
}

// ==================== Render Loop Tests ====================

/// A hand-written render loop matches the cube demo frame for frame
#[test]
fn test_manual_loop_matches_cube_demo() {
    let camera = Camera::default();
    let demo = CubeDemo::default();
    let mut model_view = ModelView::new();

    for step in 0..12 {
        let angle = step as f32 * 30.0;

        model_view.load_identity();
        model_view.translate(DEFAULT_OFFSET);
        model_view.push();
        model_view.rotate_degrees(angle, DEFAULT_CUBE_AXIS);
        let manual = MatrixUniforms::new(camera.projection(), model_view.current());
        model_view.pop().expect("stack should hold the saved matrix");

        let from_demo = demo.frame(&camera, angle).expect("frame should build");
        assert_eq!(manual, from_demo, "frame at {} degrees differs", angle);
        assert_eq!(model_view.depth(), 0);
    }
}

/// The square's centre lands on the view axis six units in front of the camera
#[test]
fn test_square_centre_in_eye_space() {
    let u = SquareDemo::default().frame(&Camera::default(), 0.0).unwrap();
    let eye = apply_column_major(&u.model_view, [0.0, 0.0, 0.0]);
    assert_eq!(eye, [0.0, 0.0, -6.0, 1.0]);

    // After projection, w carries the eye-space depth
    let clip = apply_column_major(&u.projection, [eye[0], eye[1], eye[2]]);
    assert!((clip[3] - 6.0).abs() < EPSILON, "clip w = {}", clip[3]);
    let ndc_z = clip[2] / clip[3];
    assert!(ndc_z > -1.0 && ndc_z < 1.0, "ndc z = {}", ndc_z);
}

/// Spinning the cube keeps its centre fixed while the corners move
#[test]
fn test_cube_spins_about_its_centre() {
    let camera = Camera::default();
    let demo = CubeDemo::default();

    let still = demo.frame(&camera, 0.0).unwrap();
    let turned = demo.frame(&camera, 45.0).unwrap();

    let c0 = apply_column_major(&still.model_view, [0.0, 0.0, 0.0]);
    let c1 = apply_column_major(&turned.model_view, [0.0, 0.0, 0.0]);
    for i in 0..4 {
        assert!((c0[i] - c1[i]).abs() < EPSILON);
    }

    let corner0 = apply_column_major(&still.model_view, [1.0, 1.0, 1.0]);
    let corner1 = apply_column_major(&turned.model_view, [1.0, 1.0, 1.0]);
    assert!((corner0[0] - corner1[0]).abs() > 0.01 || (corner0[1] - corner1[1]).abs() > 0.01);

    // Projection does not depend on the angle
    assert_eq!(still.projection, turned.projection);
}

/// Nested push/pop restores each level in reverse order
#[test]
fn test_hierarchical_stack() {
    let mut mv = ModelView::new();
    mv.translate(Vec3::new(0.0, 0.0, -10.0));
    let root = mv.current();

    mv.push();
    mv.translate(Vec3::new(2.0, 0.0, 0.0));
    let arm = mv.current();

    mv.push();
    mv.rotate_degrees(90.0, Vec3::Y);
    mv.translate(Vec3::new(1.0, 0.0, 0.0));
    let hand = math::transform_point(mv.current(), Vec3::ZERO);
    assert!((hand.x - 2.0).abs() < EPSILON);
    assert!((hand.z - (-11.0)).abs() < EPSILON, "hand = {:?}", hand);

    assert_eq!(mv.pop(), Ok(arm));
    assert_eq!(mv.pop(), Ok(root));
    assert_eq!(mv.pop(), Err(SceneError::EmptyMatrixStack));
}

/// Uniform bytes are the two flattened matrices back to back
#[test]
fn test_uniform_bytes_layout() {
    let u = DemoKind::Cube
        .build(DEFAULT_OFFSET, DEFAULT_CUBE_AXIS)
        .frame(&Camera::default(), 10.0)
        .unwrap();

    let floats: &[f32] = bytemuck::cast_slice(u.as_bytes());
    assert_eq!(floats.len(), 32);
    assert_eq!(&floats[..16], &u.projection);
    assert_eq!(&floats[16..], &u.model_view);
}
