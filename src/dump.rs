//! Frame dump
//!
//! Runs the configured demo over a fixed sweep of angles and writes the
//! column-major uniform values, one matrix row of output per column.

use std::fmt;
use std::io::{self, Write};

use gldemo_scene::{Demo, MatrixUniforms, SceneError};

use crate::config::AppConfig;

/// Error while producing the frame dump
#[derive(Debug)]
pub enum DumpError {
    /// A frame could not be built
    Scene(SceneError),
    /// Writing the output failed
    Io(io::Error),
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpError::Scene(err) => write!(f, "Frame construction failed: {}", err),
            DumpError::Io(err) => write!(f, "Output error: {}", err),
        }
    }
}

impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DumpError::Scene(err) => Some(err),
            DumpError::Io(err) => Some(err),
        }
    }
}

impl From<SceneError> for DumpError {
    fn from(err: SceneError) -> Self {
        DumpError::Scene(err)
    }
}

impl From<io::Error> for DumpError {
    fn from(err: io::Error) -> Self {
        DumpError::Io(err)
    }
}

/// Build every configured frame and write it to `out`
///
/// Returns the number of frames written.
pub fn dump_frames<W: Write>(config: &AppConfig, out: &mut W) -> Result<usize, DumpError> {
    let camera = config.camera.to_camera();
    let demo = config
        .scene
        .demo
        .build(config.scene.offset(), config.scene.rotation_axis());

    log_mesh(demo.as_ref());

    let mut written = 0;
    for (index, angle) in config.output.angles().enumerate() {
        let uniforms = demo.frame(&camera, angle)?;
        log::debug!("Built {} frame {} at {} degrees", demo.name(), index, angle);
        write_frame(out, index, angle, &uniforms)?;
        written += 1;
    }

    log::info!("Wrote {} {} frames", written, demo.name());
    Ok(written)
}

fn log_mesh(demo: &dyn Demo) {
    let mesh = demo.mesh();
    log::info!(
        "Demo '{}': {} vertices, draw count {} ({:?}), textured: {}",
        demo.name(),
        mesh.vertex_count(),
        mesh.draw_count(),
        mesh.primitive,
        mesh.is_textured()
    );
}

/// Write one frame's uniforms
pub fn write_frame<W: Write>(
    out: &mut W,
    index: usize,
    angle: f32,
    uniforms: &MatrixUniforms,
) -> io::Result<()> {
    writeln!(out, "frame {} angle {}", index, angle)?;
    for (name, values) in uniforms.named() {
        writeln!(out, "  {}", name)?;
        for column in values.chunks(4) {
            writeln!(
                out,
                "    {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                column[0], column[1], column[2], column[3]
            )?;
        }
    }
    Ok(())
}
