//! Spectrosphere - spheres that swell, drift and glow with the sound around them
//!
//! Every sphere listens to one slice of the spectrum: louder means bigger,
//! higher and more colorful, while coherent noise pushes it back and forth
//! in depth.

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use spectrosphere::audio::{AudioSource, AudioSystem, Spectrum};
use spectrosphere::cli::Args;
use spectrosphere::controls::{self, ControlAction};
use spectrosphere::field::{Backdrop, FrameInput, ShapeSchedule, SphereField, Viewport};
use spectrosphere::params::{FFTConfig, RenderConfig, SketchConfig, SketchFile};
use spectrosphere::rendering::{load_texture_set, RenderSystem, TextureImage};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation systems
    field: SphereField,
    shape_schedule: ShapeSchedule,
    backdrop: Backdrop,
    audio: Option<AudioSystem>,

    // Configuration
    settings: SketchFile,
    config: SketchConfig,
    render_config: RenderConfig,
    fft_config: FFTConfig,

    rng: StdRng,
    frame: u64,

    /// First fatal error hit inside the event loop
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: SketchFile) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Variant {:?}, seed {}", settings.variant, seed);

        let cube_after = settings.cube_after();

        Self {
            window: None,
            render_system: None,
            field: SphereField::new(settings.variant, seed),
            shape_schedule: ShapeSchedule::new(cube_after),
            backdrop: Backdrop::new(settings.variant),
            audio: None,
            config: settings.sketch.sanitized(),
            settings,
            render_config: RenderConfig::default(),
            fft_config: FFTConfig::default(),
            rng: StdRng::seed_from_u64(seed),
            frame: 0,
            startup_error: None,
        }
    }

    /// Create window, GPU state and audio stream
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Spectrosphere")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );

        let size = window.inner_size();
        self.render_config.window_width = size.width.max(1);
        self.render_config.window_height = size.height.max(1);

        let textures = if self.settings.variant.textured() {
            load_texture_set(self.settings.texture_dir.as_deref())
        } else {
            vec![TextureImage::white()]
        };

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.render_config,
            &textures,
            self.settings.variant.capacity(),
        ))
        .context("Failed to initialize renderer")?;

        let source = match &self.settings.audio_file {
            Some(path) => AudioSource::File(path.clone()),
            None => AudioSource::Microphone,
        };
        let audio = AudioSystem::new(self.fft_config.clone(), source)
            .context("Failed to initialize audio")?;

        log::info!("Click the window to start audio. Press ESC to quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.audio = Some(audio);
        Ok(())
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        if key == KeyCode::Escape {
            event_loop.exit();
            return;
        }
        if let Some(action) = ControlAction::from_key(key) {
            controls::apply(&mut self.config, action, &mut self.rng);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.render_config.window_width = width;
        self.render_config.window_height = height;
        if let Some(render_system) = &mut self.render_system {
            render_system.resize(&self.render_config);
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.initialize(event_loop) {
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => self.handle_key(event_loop, key),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                if let Some(audio) = &mut self.audio {
                    audio.resume();
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    /// Step the field and render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = &self.render_system else {
            return;
        };

        self.frame += 1;

        let spectrum = match &self.audio {
            Some(audio) => audio.spectrum(),
            None => Spectrum::silent(self.fft_config.bin_count()),
        };

        let input = FrameInput {
            spectrum: &spectrum,
            config: self.config,
            frame: self.frame,
            viewport: Viewport::new(
                self.render_config.window_width as f32,
                self.render_config.window_height as f32,
            ),
        };
        let instances = self.field.step(&input);
        let shape = self.shape_schedule.update(Instant::now());
        let background = self.backdrop.advance();

        match render_system.render(&instances, shape, background, self.config.texture_index) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                render_system.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = args.resolve().context("Failed to load settings")?;

    log::info!("Spectrosphere - audio-reactive sphere field");

    let mut app = App::new(settings);
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
