use std::time::{Duration, Instant};

use glam::Vec3;

use crate::{
    geometry::ShapeKind,
    rendering::config::RenderConfig,
    scene_graph::{spin::SPIN_PERIOD, Scene},
};

#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub shape: ShapeKind,
    pub translation: Vec3,
    pub rotation_axis: Vec3,
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub render: RenderConfig,
    pub spin_period: Duration,
    pub placements: Vec<Placement>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            spin_period: SPIN_PERIOD,
            placements: vec![
                Placement {
                    shape: ShapeKind::Pyramid,
                    translation: Vec3::new(-6.0, 0.0, -10.0),
                    rotation_axis: Vec3::new(0.1, 1.0, 0.2),
                },
                Placement {
                    shape: ShapeKind::Scutoid,
                    translation: Vec3::new(0.0, 0.0, -10.0),
                    rotation_axis: Vec3::new(1.0, 1.0, 0.2),
                },
                Placement {
                    shape: ShapeKind::Octahedron,
                    translation: Vec3::new(6.0, 0.0, -10.0),
                    rotation_axis: Vec3::new(0.0, 1.0, 0.0),
                },
            ],
        }
    }
}

pub struct DemoState {
    pub config: DemoConfig,
    pub scene: Scene,
}

impl DemoState {
    pub fn new(config: DemoConfig) -> anyhow::Result<Self> {
        let mut scene = Scene::with_spin_period(config.spin_period);

        for placement in &config.placements {
            scene.spawn_shape(
                placement.shape,
                placement.translation,
                placement.rotation_axis,
                Instant::now(),
            )?;
        }

        Ok(Self { config, scene })
    }
}
