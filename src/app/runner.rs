//! Main application handler for the game

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use super::controls::PlayerControls;
use super::renderer::Renderer;
use super::window::window_attributes_from_config;
use crate::config::AppConfig;
use crate::input::InputSystem;
use crate::sim::{OrbitCamera, World};

/// Main game application
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    world: World,
    camera: OrbitCamera,
    input: InputSystem,
    controls: PlayerControls,
    focused: bool,
    last_update: Option<Instant>,
}

impl App {
    /// Creates a new game application with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting game");
        info!(?config.window, "Window configuration");

        let controls = PlayerControls::new(&config.input);

        Self {
            config,
            window: None,
            renderer: None,
            world: World::demo(),
            camera: OrbitCamera::default(),
            input: InputSystem::new(),
            controls,
            focused: true,
            last_update: None,
        }
    }

    fn create_renderer(&self, window: Arc<Window>) -> anyhow::Result<Renderer> {
        // winit's event loop is synchronous; wgpu setup is async
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(Renderer::new(window, &self.config.graphics))
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        match renderer.draw(&self.world, &self.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                renderer.resize(window.inner_size());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => {
                error!(error = %e, "Render error");
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = window_attributes_from_config(&self.config.window);

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!(error = %e, "Failed to create window");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        info!(
            window.width = size.width,
            window.height = size.height,
            "Window created successfully"
        );

        match self.create_renderer(window.clone()) {
            Ok(renderer) => {
                self.renderer = Some(renderer);
                self.window = Some(window);
                self.last_update = Some(Instant::now());
            }
            Err(e) => {
                error!(error = %e, "Failed to initialize renderer");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(last_update) = self.last_update else {
            return;
        };

        let now = Instant::now();
        let delta_time = (now - last_update).as_secs_f32();
        self.last_update = Some(now);

        // Queries for this frame happen before the tracker is reset
        let outcome = self
            .controls
            .apply(self.input.tracker(), &mut self.world, &mut self.camera);

        if outcome.exit_requested {
            info!("Exit requested, exiting");
            event_loop.exit();
            return;
        }

        self.world.tick(delta_time);
        self.input.begin_frame();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Focused(focused) => {
                debug!(focused, "Focus changed");
                self.focused = focused;
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        // Raw motion arrives even while another window has focus
        if self.focused {
            self.input.handle_device_event(&event);
        }
    }
}
