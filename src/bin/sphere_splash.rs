//! Sphere Splash
//!
//! A sphere drops from 5 m into a water plane. On impact ripples spread from
//! the entry point while the sphere sinks; the cycle restarts after 12 s.
//!
//! Run natively: `cargo run --bin sphere_splash -- [--config splash.json] [--vsync]`
//!
//! Browser (wasm): build with `cargo build --bin sphere_splash --target wasm32-unknown-unknown`,
//! then run `wasm-bindgen` and serve. The canvas is appended to the page body.
//!
//! Controls:
//! - R: Reset animation
//! - W: Toggle wireframe
//! - ESC: Exit

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use sphere_splash_engine::animation::{AnimationController, FrameClock};
use sphere_splash_engine::camera::SceneCamera;
use sphere_splash_engine::config::SplashConfig;
use sphere_splash_engine::input::{KeyBindings, KeyCode, SceneAction};
use sphere_splash_engine::logging;
use sphere_splash_engine::mesh::{Mesh, WaterSurface, generate_sphere};
use sphere_splash_engine::render::{FrameParams, GpuContext, GpuContextConfig, SceneRenderer};
use sphere_splash_engine::water::WaveField;

const WINDOW_TITLE: &str = "Sphere Splash";

/// Command-line options (native only).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "sphere_splash", about = "Falling sphere splashing into rippling water")]
struct Args {
    /// JSON config file; missing keys keep their defaults
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Print the default config as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Cap frame rate to the display refresh
    #[arg(long)]
    vsync: bool,
}

/// Map winit keys to engine keys.
fn convert_key(key: WinitKeyCode) -> KeyCode {
    match key {
        WinitKeyCode::KeyR => KeyCode::R,
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

/// GPU-side state, present once the adapter and device are ready.
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: SceneRenderer,
}

struct SplashApp {
    config: SplashConfig,
    gpu_config: GpuContextConfig,
    window_size: PhysicalSize<u32>,
    /// Delivers the GPU context created asynchronously on the web
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    proxy: EventLoopProxy<GpuContext>,

    window: Option<Arc<Window>>,
    graphics: Option<Graphics>,

    controller: AnimationController,
    clock: FrameClock,
    water: WaterSurface,
    wave_field: WaveField,
    sphere_mesh: Mesh,
    camera: SceneCamera,
    bindings: KeyBindings,
    wireframe: bool,
}

impl SplashApp {
    fn new(
        config: SplashConfig,
        gpu_config: GpuContextConfig,
        window_size: PhysicalSize<u32>,
        proxy: EventLoopProxy<GpuContext>,
    ) -> Self {
        let scene = &config.scene;
        let sphere_mesh = generate_sphere(
            config.simulation.sphere_radius,
            scene.sphere_segments,
            scene.sphere_rings,
        );
        let water = WaterSurface::new(scene.water_size, scene.water_resolution);
        log::info!(
            "[Sphere Splash] Sphere mesh: {} vertices, {} triangles; water grid: {} vertices",
            sphere_mesh.vertex_count(),
            sphere_mesh.triangle_count(),
            water.mesh().vertex_count()
        );

        Self {
            controller: AnimationController::new(config.simulation, config.controller),
            clock: FrameClock::new(),
            wave_field: WaveField::new(config.wave),
            camera: SceneCamera::from_config(scene),
            bindings: KeyBindings::new(),
            wireframe: false,
            sphere_mesh,
            water,
            window: None,
            graphics: None,
            config,
            gpu_config,
            window_size,
            proxy,
        }
    }

    fn window_attributes(&self) -> WindowAttributes {
        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(self.window_size);

        #[cfg(target_arch = "wasm32")]
        let attrs = {
            use winit::platform::web::WindowAttributesExtWebSys;
            attrs.with_append(true)
        };

        attrs
    }

    /// Build pipelines and mesh buffers once the GPU is available.
    fn finish_init(&mut self, gpu: GpuContext) {
        let Some(window) = self.window.clone() else {
            log::warn!("[Sphere Splash] GPU ready without a window, ignoring");
            return;
        };

        let renderer = SceneRenderer::new(&gpu, &self.config.scene, &self.sphere_mesh, self.water.mesh());
        log::info!("[Sphere Splash] Renderer ready ({:?})", gpu.format());
        for line in self.bindings.help_lines() {
            log::info!("[Sphere Splash] {}", line);
        }

        window.request_redraw();
        self.graphics = Some(Graphics {
            window,
            gpu,
            renderer,
        });
    }

    fn handle_action(&mut self, action: SceneAction, event_loop: &ActiveEventLoop) {
        match action {
            SceneAction::Reset => {
                self.controller.reset();
                log::info!("[Sphere Splash] Animation reset");
            }
            SceneAction::ToggleWireframe => {
                self.wireframe = !self.wireframe;
                log::info!(
                    "[Sphere Splash] Wireframe {}",
                    if self.wireframe { "on" } else { "off" }
                );
            }
            SceneAction::Exit => event_loop.exit(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let state = self.controller.update(self.clock.now_millis());
        let vertices = self.water.resample(&state, &self.wave_field);

        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };

        graphics.renderer.update_water(&graphics.gpu, &vertices);
        let frame = FrameParams {
            camera: &self.camera,
            sphere_position: state.sphere_position,
            wireframe: self.wireframe,
        };

        match graphics.renderer.render(&graphics.gpu, frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                graphics.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[Sphere Splash] GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("[Sphere Splash] Render error: {:?}", e),
        }

        graphics.window.request_redraw();
    }
}

impl ApplicationHandler<GpuContext> for SplashApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(self.window_attributes()) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("[Sphere Splash] Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(Arc::clone(&window));

        #[cfg(not(target_arch = "wasm32"))]
        {
            match pollster::block_on(GpuContext::new(window, self.gpu_config.clone())) {
                Ok(gpu) => self.finish_init(gpu),
                Err(e) => {
                    log::error!("[Sphere Splash] GPU initialization failed: {}", e);
                    event_loop.exit();
                }
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            let gpu_config = self.gpu_config.clone();
            spawn_local(async move {
                match GpuContext::new(window, gpu_config).await {
                    Ok(gpu) => {
                        if proxy.send_event(gpu).is_err() {
                            log::warn!("[Sphere Splash] Event loop closed before GPU was ready");
                        }
                    }
                    Err(e) => log::error!("[Sphere Splash] GPU initialization failed: {}", e),
                }
            });
        }
    }

    fn user_event(&mut self, _: &ActiveEventLoop, gpu: GpuContext) {
        self.finish_init(gpu);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(graphics) = self.graphics.as_mut() {
                    graphics.gpu.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(action) = self.bindings.get_action(convert_key(code)) {
                        self.handle_action(action, event_loop);
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    logging::init();
    let args = Args::parse();

    if args.print_config {
        match SplashConfig::default().to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize config: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config = match &args.config {
        Some(path) => match SplashConfig::load(path) {
            Ok(config) => {
                log::info!("[Sphere Splash] Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("[Sphere Splash] Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SplashConfig::default(),
    };

    let gpu_config = GpuContextConfig {
        vsync: args.vsync,
        ..Default::default()
    };

    let event_loop = match EventLoop::<GpuContext>::with_user_event().build() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("[Sphere Splash] Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = SplashApp::new(
        config,
        gpu_config,
        PhysicalSize::new(args.width, args.height),
        event_loop.create_proxy(),
    );
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("[Sphere Splash] Event loop error: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Browser entry point. The GPU is requested asynchronously from `resumed`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_start() {
    use winit::platform::web::EventLoopExtWebSys;

    logging::init();

    let event_loop = match EventLoop::<GpuContext>::with_user_event().build() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("[Sphere Splash] Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let app = SplashApp::new(
        SplashConfig::default(),
        GpuContextConfig::default(),
        PhysicalSize::new(800, 600),
        event_loop.create_proxy(),
    );
    event_loop.spawn_app(app);
}
