//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GLD_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use gldemo_math::Vec3;
use gldemo_scene::{Camera, DemoKind};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Frame dump configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GLD_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // GLD_CAMERA__FOV=60 -> camera.fov = 60
        figment = figment.merge(Env::prefixed("GLD_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Width / height
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = Camera::default();
        Self {
            fov: camera.fov_y,
            aspect: camera.aspect,
            near: camera.near,
            far: camera.far,
        }
    }
}

impl CameraConfig {
    /// Convert to the scene crate's camera
    pub fn to_camera(&self) -> Camera {
        Camera::new(self.fov, self.aspect, self.near, self.far)
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Which demo to run ("square" or "cube")
    pub demo: DemoKind,
    /// Object position relative to the camera [x, y, z]
    pub offset: [f32; 3],
    /// Cube spin axis [x, y, z], used as given
    pub rotation_axis: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            demo: DemoKind::Cube,
            offset: [0.0, 0.0, -6.0],
            rotation_axis: [1.0, 0.0, 1.0],
        }
    }
}

impl SceneConfig {
    /// Object offset as a vector
    pub fn offset(&self) -> Vec3 {
        self.offset.into()
    }

    /// Spin axis as a vector
    pub fn rotation_axis(&self) -> Vec3 {
        self.rotation_axis.into()
    }
}

/// Frame dump configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of frames to emit
    pub frames: u32,
    /// Rotation of the first frame in degrees
    pub start_angle: f32,
    /// Rotation added per frame in degrees
    pub angle_step: f32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            frames: 4,
            start_angle: 0.0,
            angle_step: 30.0,
        }
    }
}

impl OutputConfig {
    /// Rotation angle for each frame to emit
    pub fn angles(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.frames).map(move |n| self.start_angle + n as f32 * self.angle_step)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.camera.fov, 45.0);
        assert_eq!(config.scene.demo, DemoKind::Cube);
        assert_eq!(config.scene.offset(), Vec3::new(0.0, 0.0, -6.0));
        assert_eq!(config.output.frames, 4);
    }

    #[test]
    fn test_camera_conversion() {
        let camera = CameraConfig::default().to_camera();
        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn test_angles() {
        let output = OutputConfig {
            frames: 3,
            start_angle: 10.0,
            angle_step: 45.0,
        };
        let angles: Vec<f32> = output.angles().collect();
        assert_eq!(angles, vec![10.0, 55.0, 100.0]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("fov"));
        assert!(toml.contains("demo = \"cube\""));
        assert!(toml.contains("rotation_axis"));
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[camera]\nfov = 60.0\n").unwrap();
        assert_eq!(config.camera.fov, 60.0);
        assert_eq!(config.camera.aspect, 640.0 / 480.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.camera.far, 100.0);
        assert_eq!(config.scene.demo, DemoKind::Cube);
    }

    #[test]
    fn test_partial_scene_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[scene]\ndemo = \"square\"\n").unwrap();
        assert_eq!(config.scene.demo, DemoKind::Square);
        assert_eq!(config.scene.offset, [0.0, 0.0, -6.0]);
        assert_eq!(config.scene.rotation_axis, [1.0, 0.0, 1.0]);

        let config: AppConfig = toml::from_str("[output]\nframes = 2\n").unwrap();
        assert_eq!(config.output.frames, 2);
        assert_eq!(config.output.angle_step, 30.0);
        assert_eq!(config.debug.log_level, "info");
    }
}
