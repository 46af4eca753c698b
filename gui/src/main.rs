use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent as WinitWindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

pub(crate) mod app;
pub(crate) mod camera;
pub(crate) mod control_points;
pub(crate) mod model;
pub(crate) mod scene;

use crate::{
    app::App,
    scene::{MAX_SAMPLES_PER_SEGMENT, Scene},
};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 700;

#[cfg(feature = "bundle-shaders")]
fn shader_source() -> std::io::Result<String> {
    Ok(include_str!("../shaders/curve.wgsl").to_owned())
}

#[cfg(not(feature = "bundle-shaders"))]
fn shader_source() -> std::io::Result<String> {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/curve.wgsl"))
}

struct GuiApp {
    shader: String,
    scene: Option<Scene>,
    window: Option<Arc<Window>>,
    app: Option<App<'static>>,
}

impl GuiApp {
    fn new(shader: String, scene: Scene) -> Self {
        Self {
            shader,
            scene: Some(scene),
            window: None,
            app: None,
        }
    }
}

impl ApplicationHandler for GuiApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(scene) = self.scene.take() else {
            return;
        };
        let window = Arc::new(
            event_loop
                .create_window(
                    winit::window::WindowAttributes::default()
                        .with_title("Bézier")
                        .with_inner_size(winit::dpi::PhysicalSize::new(
                            WINDOW_WIDTH,
                            WINDOW_HEIGHT,
                        )),
                )
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to find an appropriate adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: Default::default(),
        }))
        .expect("Failed to create device");

        let app = App::new(size, adapter, surface, device, queue, &self.shader, scene);
        self.app = Some(app);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WinitWindowEvent,
    ) {
        use app::Reply;

        if let Some(app) = &mut self.app
            && let Some(window) = &self.window
        {
            match app.window_event(event) {
                Reply::Continue => (),
                Reply::Quit => event_loop.exit(),
                Reply::Redraw => window.request_redraw(),
            }
        }
    }
}

fn main() {
    env_logger::init();

    let matches = clap::App::new("gui")
        .about("Draws a piecewise cubic Bézier curve")
        .arg(
            clap::Arg::with_name("input")
                .help("Control point file, one `x y z` per line")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("samples")
                .short('n')
                .long("samples")
                .help("Samples per segment")
                .takes_value(true)
                .default_value("20"),
        )
        .arg(
            clap::Arg::with_name("color")
                .long("color")
                .help("Curve color as r,g,b,a in 0..1")
                .takes_value(true)
                .default_value("1,0.8,0.1,1"),
        )
        .get_matches();

    let control_points = match matches.value_of("input") {
        Some(input) => match control_points::load(Path::new(input)) {
            Ok(points) => points,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => control_points::default_control_points(),
    };
    if control_points.len() < 4 {
        eprintln!(
            "Warning: {} control points is not enough for a cubic segment; nothing will be drawn.",
            control_points.len()
        );
    }

    let Some(samples) = matches
        .value_of("samples")
        .and_then(|s| s.parse::<NonZeroUsize>().ok())
        .filter(|n| n.get() <= MAX_SAMPLES_PER_SEGMENT)
    else {
        eprintln!("Error: --samples must be an integer in 1..={MAX_SAMPLES_PER_SEGMENT}");
        std::process::exit(1);
    };
    let Some(color) = matches.value_of("color").and_then(control_points::parse_color) else {
        eprintln!("Error: --color must be four comma-separated values in 0..1");
        std::process::exit(1);
    };

    let shader = match shader_source() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: could not load shader: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {} control points ({} segments)",
        control_points.len(),
        bezier::segments(&control_points).count()
    );

    let scene = Scene::new(control_points, samples, color);
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = GuiApp::new(shader, scene);
    let _ = event_loop.run_app(&mut app);
}
