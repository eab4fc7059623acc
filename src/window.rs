use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    window::{Window, WindowId},
};

use crate::config::SteamConfig;
use crate::error::SimulationError;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::render::{Canvas, Renderer};
use crate::time::FrameClock;

pub(crate) struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    field: ParticleField,
    renderer: Renderer,
    canvas: Canvas,
    clock: FrameClock,
    config: SteamConfig,
    error: Option<SimulationError>,
}

impl App {
    pub(crate) fn new(field: ParticleField) -> Self {
        let config = field.config().clone();
        Self {
            window: None,
            gpu_state: None,
            renderer: Renderer::new(&config),
            canvas: Canvas::new(config.width, config.height),
            clock: FrameClock::new(config.tick_rate),
            field,
            config,
            error: None,
        }
    }

    /// Error that stopped the event loop, if any.
    pub(crate) fn take_error(&mut self) -> Option<SimulationError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: SimulationError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            self.config.width,
            self.config.height,
        ))?;

        log::info!(
            "window {}x{} ready, {} particles at {} ticks/s",
            self.config.width,
            self.config.height,
            self.field.len(),
            self.config.tick_rate
        );

        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    /// Advance the field one tick and draw it, each particle right after its step.
    fn frame(&mut self) {
        if self.clock.tick(Instant::now()) {
            log::debug!(
                "frame {} at {:.1} fps, {} particles",
                self.clock.frame(),
                self.clock.fps(),
                self.field.len()
            );
        }

        self.renderer.begin_frame(&mut self.canvas);
        let renderer = &self.renderer;
        let canvas = &mut self.canvas;
        self.field
            .tick_with(|particle| renderer.draw_particle(canvas, particle));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed after {} frames", self.clock.frame());
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if !self.clock.is_due(Instant::now()) {
                    return;
                }
                self.frame();

                if let Some(gpu_state) = &mut self.gpu_state {
                    match gpu_state.present(&self.canvas) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.resize(winit::dpi::PhysicalSize {
                                width: gpu_state.config.width,
                                height: gpu_state.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("GPU out of memory");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.clock.is_due(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}
