//! Strata demo application
//!
//! Loads a scene file, prints the canonical view matrix, traces the scene
//! through the camera as an ASCII frame and logs a few frames of the color
//! cycle the fragment stage animates.
//!
//! Usage: `strata_demo [scene.toml | scene.ron]`

use std::path::PathBuf;

use strata_engine::config::{Config, ConfigError, SceneConfig};
use strata_engine::foundation::logging;
use strata_engine::foundation::math::{Mat4, Vec3};
use strata_engine::physics::{Primitive, Scene};
use strata_engine::render::{
    Camera, CameraPushConstants, ColorUniform, GridTooLarge, PlaneMesh, Transform,
};

/// Traced frame width in characters
const FRAME_WIDTH: u16 = 48;
/// Traced frame height in characters
const FRAME_HEIGHT: u16 = 24;
/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// Demo errors
#[derive(thiserror::Error, Debug)]
enum DemoError {
    /// Scene file could not be loaded or contained invalid primitives
    #[error("failed to load scene: {0}")]
    Config(#[from] ConfigError),

    /// Plane grid dimensions overflow the index type
    #[error("failed to build plane mesh: {0}")]
    Mesh(#[from] GridTooLarge),

    /// Too many command line arguments
    #[error("usage: strata_demo [scene.toml | scene.ron]")]
    Usage,
}

struct DemoApp {
    scene: Scene,
    camera: Camera,
    plane: PlaneMesh,
}

impl DemoApp {
    fn new(config: &SceneConfig) -> Result<Self, DemoError> {
        let scene = config.build_scene()?;
        let mut camera = config.camera.build()?;
        camera.set_aspect(f32::from(FRAME_WIDTH) / (f32::from(FRAME_HEIGHT) * CELL_ASPECT));
        let plane = PlaneMesh::grid(4, 4)?;

        Ok(Self { scene, camera, plane })
    }

    /// One character per cell: `#` sphere, `+` cube, `.` background
    fn trace_frame(&self) -> Vec<String> {
        (0..FRAME_HEIGHT)
            .map(|row| {
                let v = (f32::from(row) + 0.5) / f32::from(FRAME_HEIGHT) * 2.0 - 1.0;
                (0..FRAME_WIDTH)
                    .map(|col| {
                        let u = (f32::from(col) + 0.5) / f32::from(FRAME_WIDTH) * 2.0 - 1.0;
                        match self.scene.closest_primitive(&self.camera.primary_ray(u, v)) {
                            Some((Primitive::Sphere(_), _)) => '#',
                            Some((Primitive::Cube(_), _)) => '+',
                            None => '.',
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn run(&self) {
        log::info!(
            "Camera at {} facing {}, near plane {}",
            self.camera.position,
            self.camera.direction,
            self.camera.near_plane_dimensions()
        );

        for line in self.trace_frame() {
            println!("{line}");
        }

        let mut transform = Transform::default();
        for frame in 0..3_u8 {
            let time = f32::from(frame) * 0.5;
            let color = Vec3::from(ColorUniform::cycle(time).value);
            transform.rotate(Vec3::new([0.0, 0.5, 0.0]));
            let heading = transform.model().transform_vector(Vec3::unit_x());
            log::info!("Frame {frame} (t = {time}s): color {color}, model +X heading {heading}");
        }

        log::info!(
            "Plane mesh: {} vertices, {} indices; camera push constants {} bytes",
            self.plane.vertices().len(),
            self.plane.indices.len(),
            CameraPushConstants::range().size
        );
    }
}

fn scene_config() -> Result<SceneConfig, DemoError> {
    let mut args = std::env::args_os().skip(1);
    let path = args.next().map(PathBuf::from);
    if args.next().is_some() {
        return Err(DemoError::Usage);
    }

    match path {
        Some(path) => {
            log::info!("Loading scene from {}", path.display());
            Ok(SceneConfig::load_from_file(path)?)
        }
        None => {
            log::info!("No scene file given, using the built-in scene");
            Ok(SceneConfig::default())
        }
    }
}

fn main() {
    logging::init();
    log::info!("Starting Strata demo");

    let view = Mat4::view_matrix(
        Vec3::new([0.0, 0.0, 0.0]),
        Vec3::new([1.0, 0.0, 0.0]),
        Vec3::new([0.0, -1.0, 0.0]),
    );
    log::info!("View matrix looking down +X:\n{view}");

    let result = scene_config().and_then(|config| DemoApp::new(&config));
    match result {
        Ok(app) => {
            app.run();
            log::info!("Demo completed successfully");
        }
        Err(e) => {
            log::error!("Demo failed: {e}");
            std::process::exit(1);
        }
    }
}
