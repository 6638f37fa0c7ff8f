use std::{sync::Arc, time::Instant};

use anyhow::Context;
use id_arena::Arena;
use wgpu::CommandEncoderDescriptor;
use winit::window::Window;

use crate::{
    engine::FrameRenderer,
    rendering::{
        config::RenderConfig,
        draw_list::{DrawCommand, DrawList},
        model_uniform::{ModelUniform, ModelUniformState},
        passes::flat_pass::{FlatPass, FlatPassTextureViews},
        render_common::RenderCommon,
        render_mesh::{self, RenderMesh},
        texture::DepthTexture,
    },
    scene_graph::Scene,
};

pub struct Renderer {
    pub window: Arc<Window>,

    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,

    common: RenderCommon,
    depth_texture: DepthTexture,
    render_meshes: Arena<RenderMesh>,
    model_uniforms: Arena<ModelUniform>,

    clear_color: wgpu::Color,
    flat_pass: FlatPass,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, config: &RenderConfig) -> anyhow::Result<Renderer> {
        let size = window.inner_size();
        let (width, height) = if size.width > 0 && size.height > 0 {
            (size.width, size.height)
        } else {
            (config.width, config.height)
        };

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create a rendering surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("No compatible graphics adapter is available")?;

        let adapter_info = adapter.get_info();
        log::info!(
            "Using adapter {} ({:?})",
            adapter_info.name,
            adapter_info.backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                label: None,
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("Failed to create a graphics device")?;

        let common = RenderCommon::new(
            &device,
            &adapter,
            &surface,
            width,
            height,
            &config.projection,
        )
        .context("Failed to configure the surface")?;

        let depth_texture =
            DepthTexture::new(&device, &common.output_surface_config, "Depth Texture");

        let flat_pass = FlatPass::create(&device, &common).context("Failed to create flat pass")?;

        Ok(Self {
            window,
            surface,
            device,
            queue,
            common,
            depth_texture,
            render_meshes: Arena::new(),
            model_uniforms: Arena::new(),
            clear_color: config.clear_color,
            flat_pass,
        })
    }

    /// Uploads every mesh of the scene and gives each object its own model uniform.
    pub fn load_models(&mut self, scene: &mut Scene) -> anyhow::Result<()> {
        for (_id, scene_mesh) in scene.meshes.iter_mut() {
            anyhow::ensure!(
                scene_mesh.mesh.topology == FlatPass::TOPOLOGY,
                "Mesh {} has topology {:?}, the flat pass draws {:?}",
                scene_mesh.mesh.name,
                scene_mesh.mesh.topology,
                FlatPass::TOPOLOGY
            );

            let render_mesh = RenderMesh::from_mesh(&self.device, &scene_mesh.mesh);
            scene_mesh.render_mesh = Some(self.render_meshes.alloc(render_mesh));

            let counts = scene_mesh.mesh.counts();
            log::info!(
                "Loaded mesh {} with {} vertices, {} colors and {} indices",
                scene_mesh.mesh.name,
                counts.vertices,
                counts.colors,
                counts.indices
            );
        }

        for (_id, object) in scene.objects.iter_mut() {
            let model_uniform = ModelUniform::new(
                &self.device,
                &self.flat_pass.model_bind_group_layout,
                &object.name,
                ModelUniformState {
                    model: object.transform.matrix(),
                },
            );
            object.model_uniform = Some(self.model_uniforms.alloc(model_uniform));
        }

        // Spinning starts once the objects are on the GPU, not when the scene was built.
        scene.restart_clock(Instant::now());

        Ok(())
    }

    /// Puts the surface back to its startup configuration.
    pub fn reconfigure(&self) {
        self.surface
            .configure(&self.device, &self.common.output_surface_config);
    }

    fn resolve(&self, scene: &Scene, command: &DrawCommand) -> Option<(&RenderMesh, &ModelUniform)> {
        let render_mesh = scene
            .get_mesh(command.mesh)
            .and_then(|scene_mesh| scene_mesh.render_mesh)
            .and_then(|id| self.render_meshes.get(id))?;

        let model_uniform = scene
            .get_object(command.object)
            .and_then(|object| object.model_uniform)
            .and_then(|id| self.model_uniforms.get(id))?;

        Some((render_mesh, model_uniform))
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let draw_list = DrawList::gather(scene);

        for command in &draw_list.commands {
            match self.resolve(scene, command) {
                Some((_, model_uniform)) => model_uniform.update(
                    &self.queue,
                    ModelUniformState {
                        model: command.model,
                    },
                ),
                None => log::warn!("Skipping object that has not been uploaded"),
            }
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.flat_pass.render(
            &FlatPassTextureViews {
                color: view.clone(),
                depth: self.depth_texture.view().clone(),
            },
            &mut encoder,
            self.clear_color,
            |render_pass| {
                for command in &draw_list.commands {
                    let Some((render_mesh, model_uniform)) = self.resolve(scene, command) else {
                        continue;
                    };

                    render_mesh::draw_mesh(
                        render_pass,
                        render_mesh,
                        model_uniform,
                        command.index_count,
                    );
                }
            },
        );

        let command_buffer = encoder.finish();

        self.queue.submit([command_buffer]);

        output.present();

        Ok(())
    }
}

impl FrameRenderer for Renderer {
    type Error = wgpu::SurfaceError;

    fn render_frame(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        self.render(scene)
    }
}
