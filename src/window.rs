use std::{sync::Arc, time::Instant};

use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{
    demo::{DemoConfig, DemoState},
    engine,
    rendering::renderer::Renderer,
};

struct App {
    renderer: Option<Renderer>,
    demo_state: DemoState,
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn from_demo_state(demo_state: DemoState) -> Self {
        Self {
            renderer: None,
            demo_state,
            startup_error: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<Renderer> {
        let config = &self.demo_state.config.render;

        let window_attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(false);
        let window = event_loop
            .create_window(window_attributes)
            .context("Failed to create window")?;

        let mut renderer = pollster::block_on(Renderer::new(Arc::new(window), config))
            .context("Graphics initialisation failed")?;
        renderer.load_models(&mut self.demo_state.scene)?;

        Ok(renderer)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        match self.start(event_loop) {
            Ok(renderer) => {
                renderer.window.request_redraw();
                self.renderer = Some(renderer);
            }
            Err(e) => {
                log::error!("{:#}", e);
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                renderer.window.request_redraw();

                match engine::frame(renderer, &mut self.demo_state.scene, Instant::now()) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory");
                        event_loop.exit();
                    }
                    Err(wgpu::SurfaceError::Timeout) => {
                        log::warn!("Timeout");
                    }
                    Err(other) => {
                        log::error!("Unexpected error: {:?}", other);
                    }
                }
            }
            _ => (),
        }
    }
}

pub async fn run(config: DemoConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let demo_state = DemoState::new(config).context("Failed to create demo state")?;
    let mut app = App::from_demo_state(demo_state);
    event_loop.run_app(&mut app)?;

    if let Some(error) = app.startup_error {
        return Err(error);
    }

    Ok(())
}
