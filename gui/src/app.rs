use glm::Vec2;
use log::{info, warn};
use nalgebra_glm as glm;
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    keyboard::{Key, ModifiersState, NamedKey},
};

use crate::{
    camera::{Camera, Movement},
    model::CurveModel,
    scene::Scene,
};

pub struct App<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene: Scene,
    model: CurveModel,
    camera: Camera,

    depth: (wgpu::Texture, wgpu::TextureView),

    modifiers: ModifiersState,
}

pub enum Reply {
    Continue,
    Redraw,
    Quit,
}

impl<'a> App<'a> {
    pub fn new(
        size: PhysicalSize<u32>,
        adapter: wgpu::Adapter,
        surface: wgpu::Surface<'a>,
        device: wgpu::Device,
        queue: wgpu::Queue,
        shader_src: &str,
        scene: Scene,
    ) -> Self {
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = Self::rebuild_depth_(size, &device);
        let model = CurveModel::new(&device, surface_format, shader_src);

        Self {
            depth,
            config,
            scene,
            model,
            camera: Camera::new(size.width.max(1) as f32, size.height.max(1) as f32),
            surface,
            device,
            queue,

            modifiers: ModifiersState::empty(),
        }
    }

    pub fn window_event(&mut self, e: WindowEvent) -> Reply {
        match e {
            WindowEvent::Resized(size) => {
                self.resize(size);
                Reply::Redraw
            }
            WindowEvent::CloseRequested => Reply::Quit,
            WindowEvent::RedrawRequested => {
                self.redraw();
                Reply::Continue
            }
            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = m.state();
                Reply::Continue
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return Reply::Continue;
                }
                match event.logical_key.as_ref() {
                    Key::Named(NamedKey::Escape) => Reply::Quit,
                    Key::Character("q") if self.modifiers.super_key() => Reply::Quit,
                    Key::Character(c) => self.key(c),
                    _ => Reply::Continue,
                }
            }
            WindowEvent::MouseInput { button, state, .. } => {
                use ElementState::*;
                match state {
                    Pressed => self.camera.mouse_pressed(button),
                    Released => self.camera.mouse_released(button),
                }
                Reply::Continue
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self
                    .camera
                    .mouse_move(Vec2::new(position.x as f32, position.y as f32))
                {
                    Reply::Redraw
                } else {
                    Reply::Continue
                }
            }
            _ => Reply::Continue,
        }
    }

    fn key(&mut self, c: &str) -> Reply {
        match c.to_ascii_lowercase().as_str() {
            "w" => self.camera.key_move(Movement::Forward),
            "s" => self.camera.key_move(Movement::Backward),
            "a" => self.camera.key_move(Movement::Left),
            "d" => self.camera.key_move(Movement::Right),
            "+" | "=" => self.scene.increase_density(),
            "-" => self.scene.decrease_density(),
            _ => return Reply::Continue,
        }
        Reply::Redraw
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width > 0 && size.height > 0 {
            self.config.width = size.width;
            self.config.height = size.height;
            self.surface.configure(&self.device, &self.config);
            self.depth = Self::rebuild_depth_(size, &self.device);
            self.camera.set_size(size.width as f32, size.height as f32);
        }
    }

    fn rebuild_depth_(
        size: PhysicalSize<u32>,
        device: &wgpu::Device,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let size = wgpu::Extent3d {
            width: size.width.max(1),
            height: size.height.max(1),
            depth_or_array_layers: 1,
        };
        let desc = wgpu::TextureDescriptor {
            label: Some("depth tex"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        };
        let tex = device.create_texture(&desc);
        let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
        (tex, view)
    }

    pub fn redraw(&mut self) {
        if self
            .scene
            .regenerate_if_dirty(&mut self.model.sink(&self.device))
        {
            info!(
                "Uploaded {} curve samples ({} per segment)",
                self.scene.curve().sample_count(),
                self.scene.samples_per_segment()
            );
        }

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                warn!("Skipping frame: {e}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        self.model.draw(
            &self.camera,
            self.scene.color(),
            &self.queue,
            &view,
            &self.depth.1,
            &mut encoder,
        );
        self.queue.submit(Some(encoder.finish()));
        output.present();
    }
}
