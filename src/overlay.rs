//! Overlay window and builder.
//!
//! [`Confetti`] is the front door: configure a burst with method
//! chaining, then call `.run()` to open a window and play it. The app
//! drives the headless [`Engine`] from `RedrawRequested`, re-arming the
//! redraw while a run is live, which is the winit shape of a
//! per-display-refresh callback loop.
//!
//! Triggers while the window is open:
//! - **Space** restarts the burst (re-activation while active is an
//!   explicit restart: fresh strips, fresh deadlines).
//! - **Escape** cuts the run short; the surface clears on the next frame.

use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::engine::{Engine, Frame};
use crate::error::OverlayError;
use crate::particle::Instance;
use crate::render::Renderer;
use crate::visuals::Palette;

/// A confetti burst overlay builder.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```no_run
/// use std::time::Duration;
/// use confetti::Confetti;
///
/// fn main() -> Result<(), confetti::OverlayError> {
///     Confetti::new()
///         .with_duration(Duration::from_secs(15))
///         .run()
/// }
/// ```
pub struct Confetti {
    duration: Duration,
    palette: Palette,
    title: String,
}

impl Confetti {
    /// Builder with default settings: an 8 second burst in the classic
    /// palette.
    pub fn new() -> Self {
        Self {
            duration: Duration::from_secs(8),
            palette: Palette::classic(),
            title: "confetti".to_string(),
        }
    }

    /// Visible fall time before the fade begins. The fade adds 600ms and
    /// teardown another 50ms on top.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Replace the 16-color strip palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Open the overlay window and play the burst. Blocks until the run
    /// completes or the window is closed.
    pub fn run(self) -> Result<(), OverlayError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.duration, self.palette, self.title);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}

/// Logical (CSS pixel) extent of a window, the coordinate space every
/// particle lives in.
fn logical_extent(window: &Window) -> Vec2 {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Vec2::new(size.width as f32, size.height as f32)
}

struct App {
    duration: Duration,
    palette: Palette,
    title: String,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    engine: Engine,
    scratch: Vec<Instance>,
}

impl App {
    fn new(duration: Duration, palette: Palette, title: String) -> Self {
        Self {
            duration,
            palette,
            title,
            window: None,
            renderer: None,
            engine: Engine::new(),
            scratch: Vec::new(),
        }
    }

    fn restart(&mut self) {
        if let Some(window) = &self.window {
            if self.renderer.is_some() {
                self.engine
                    .activate(Instant::now(), self.duration, logical_extent(window));
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::warn!("confetti disabled, window creation failed: {}", e);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        // Without a drawing surface the run degrades to a silent no-op:
        // nothing is scheduled and nothing is retained.
        match pollster::block_on(Renderer::new(window.clone())) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                log::warn!("confetti disabled, GPU init failed: {}", e);
                event_loop.exit();
                return;
            }
        }

        self.restart();
        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.engine.deactivate();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                // Backing resolution only; strips keep their logical
                // coordinates and pick up the new extent next frame.
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Space => self.restart(),
                KeyCode::Escape => self.engine.deactivate(),
                _ => {}
            },
            WindowEvent::RedrawRequested => {
                let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer) else {
                    return;
                };
                let viewport = logical_extent(window);

                let (opacity, done) = match self.engine.frame(Instant::now(), viewport) {
                    Frame::Drawn { particles, opacity } => {
                        self.scratch.clear();
                        self.scratch
                            .extend(particles.iter().map(|p| p.to_instance(&self.palette)));
                        (opacity, false)
                    }
                    // Hard stop or deactivation: one final clear, then
                    // stop re-arming redraws.
                    Frame::Cleared | Frame::Idle => {
                        self.scratch.clear();
                        (0.0, true)
                    }
                };

                match renderer.render(&self.scratch, viewport, opacity) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost) => renderer.resize(winit::dpi::PhysicalSize {
                        width: renderer.config.width,
                        height: renderer.config.height,
                    }),
                    Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                    Err(e) => log::warn!("render error: {:?}", e),
                }

                if done {
                    event_loop.exit();
                } else {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
