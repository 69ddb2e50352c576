//! Windowed renderer for the simulation.
//!
//! The renderer owns the winit event loop and pumps it once per frame, so
//! the caller's frame loop stays a plain `loop`. Each [`Renderer::render`]
//! call polls input, advances the camera, raymarches the scene and paints
//! the HUD overlay.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use glam::Vec3;
use physics::{Ball, SimConfig};
use wgpu::util::DeviceExt;
use winit::dpi::LogicalSize;
use winit::event::{DeviceEvent, ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

use crate::camera::{Camera, CameraMode, DOLLY_SPEED, FREE_MOVE_SPEED};
use crate::gpu_types::{BallGpu, CameraUniform, SceneUniform};
use crate::hud::{EguiHud, HudOverlay};

const WINDOW_WIDTH: f64 = 1000.0;
const WINDOW_HEIGHT: f64 = 700.0;

pub struct Renderer {
    event_loop: EventLoop<()>,
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    camera: Camera,
    camera_buffer: wgpu::Buffer,
    scene_buffer: wgpu::Buffer,
    balls_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    bind_group_layout: wgpu::BindGroupLayout,
    hud: EguiHud,
    sim_config: SimConfig,
    ball_count: u32,
    show_grid: bool,
    pressed_keys: HashSet<KeyCode>,
    mouse_look: bool,
}

impl Renderer {
    /// Open the window and set up the raymarching pipeline.
    #[allow(clippy::too_many_lines)]
    pub fn new(sim_config: &SimConfig) -> Result<Self> {
        let event_loop = EventLoop::new().context("create event loop")?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title("Ricochet")
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .build(&event_loop)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("failed to get adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Renderer Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            },
            None,
        ))
        .context("failed to request device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let camera = Camera::new(config.width, config.height);
        let camera_uniform = CameraUniform::from_camera(&camera);
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::bytes_of(&camera_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let scene_uniform = SceneUniform {
            ball_count: 0,
            show_grid: 0,
            cube_size: sim_config.cube_size,
            _pad: 0.0,
        };
        let scene_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Buffer"),
            contents: bytemuck::bytes_of(&scene_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let balls_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("balls"),
            size: 1024,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bind layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = create_bind_group(
            &device,
            &bind_group_layout,
            &camera_buffer,
            &scene_buffer,
            &balls_buffer,
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("SDF shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("sdf.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sdf pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 2]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let quad: [[f32; 2]; 6] = [
            [-1.0, -1.0],
            [1.0, -1.0],
            [-1.0, 1.0],
            [-1.0, 1.0],
            [1.0, -1.0],
            [1.0, 1.0],
        ];
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad"),
            contents: bytemuck::cast_slice(&quad),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let hud = EguiHud::new(&device, surface_format, &window);

        tracing::info!(
            width = config.width,
            height = config.height,
            "renderer initialized"
        );

        Ok(Self {
            event_loop,
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            camera,
            camera_buffer,
            scene_buffer,
            balls_buffer,
            bind_group,
            bind_group_layout,
            hud,
            sim_config: *sim_config,
            ball_count: 0,
            show_grid: false,
            pressed_keys: HashSet::new(),
            mouse_look: false,
        })
    }

    /// Upload the current ball state, regrowing the storage buffer when the
    /// scene outgrows it.
    pub fn update_scene(&mut self, balls: &[Ball]) {
        let ball_data: Vec<BallGpu> = balls.iter().map(BallGpu::from).collect();
        self.ball_count = ball_data.len() as u32;

        if ball_data.is_empty() {
            return;
        }
        let bytes = bytemuck::cast_slice(&ball_data);
        if self.balls_buffer.size() < bytes.len() as u64 {
            self.balls_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("balls"),
                    contents: bytes,
                    usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
                });
            self.bind_group = create_bind_group(
                &self.device,
                &self.bind_group_layout,
                &self.camera_buffer,
                &self.scene_buffer,
                &self.balls_buffer,
            );
        } else {
            self.queue.write_buffer(&self.balls_buffer, 0, bytes);
        }
    }

    /// Poll input, move the camera and draw one frame.
    ///
    /// Returns `Ok(false)` once the window close request arrives; the caller
    /// exits its loop and drops the renderer.
    pub fn render(&mut self, dt: f32) -> Result<bool> {
        let mut exit = false;
        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, elwt| match &event {
                Event::WindowEvent { event, .. } => {
                    match event {
                        WindowEvent::CloseRequested => {
                            exit = true;
                            elwt.exit();
                            return;
                        }
                        WindowEvent::Resized(size) => {
                            if size.width > 0 && size.height > 0 {
                                self.config.width = size.width;
                                self.config.height = size.height;
                                self.surface.configure(&self.device, &self.config);
                                self.camera.resize(size.width, size.height);
                            }
                        }
                        _ => {}
                    }
                    if self.hud.on_window_event(&self.window, event) {
                        return;
                    }
                    match event {
                        WindowEvent::KeyboardInput { event: key, .. } => {
                            if let PhysicalKey::Code(code) = key.physical_key {
                                match key.state {
                                    ElementState::Pressed => {
                                        self.pressed_keys.insert(code);
                                        if !key.repeat {
                                            match code {
                                                KeyCode::KeyG => self.show_grid = !self.show_grid,
                                                KeyCode::KeyC => self.camera.cycle_mode(),
                                                _ => {}
                                            }
                                        }
                                    }
                                    ElementState::Released => {
                                        self.pressed_keys.remove(&code);
                                    }
                                }
                            }
                        }
                        WindowEvent::MouseInput { state, button, .. } => {
                            if *button == MouseButton::Left {
                                self.mouse_look = *state == ElementState::Pressed;
                            }
                        }
                        _ => {}
                    }
                }
                Event::DeviceEvent {
                    event: DeviceEvent::MouseMotion { delta },
                    ..
                } => {
                    if self.mouse_look && self.camera.mode == CameraMode::Free {
                        self.camera.free_look(delta.0 as f32, delta.1 as f32);
                    }
                }
                _ => {}
            });

        if matches!(status, PumpStatus::Exit(_)) || exit {
            return Ok(false);
        }

        self.update_camera(dt);

        let camera_uniform = CameraUniform::from_camera(&self.camera);
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera_uniform));
        let scene_uniform = SceneUniform {
            ball_count: self.ball_count,
            show_grid: u32::from(self.show_grid),
            cube_size: self.sim_config.cube_size,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&scene_uniform));

        let overlay = HudOverlay::new(&self.sim_config, self.camera.mode);
        let hud_frame = self.hud.run(&self.window, &overlay);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: hud_frame.pixels_per_point,
        };

        let output = self
            .surface
            .get_current_texture()
            .context("failed to acquire surface texture")?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("enc") });
        let hud_commands = self.hud.prepare(
            &self.device,
            &self.queue,
            &mut encoder,
            &hud_frame,
            &screen_descriptor,
        );
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.96,
                            g: 0.96,
                            b: 0.94,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.draw(0..6, 0..1);
            self.hud.render(&mut rpass, &hud_frame, &screen_descriptor);
        }
        self.queue
            .submit(hud_commands.into_iter().chain(Some(encoder.finish())));
        output.present();
        self.hud.cleanup(&hud_frame);

        Ok(true)
    }

    /// Camera mode name for logs or callers without HUD access.
    #[must_use]
    pub fn camera_mode(&self) -> CameraMode {
        self.camera.mode
    }

    fn update_camera(&mut self, dt: f32) {
        if self.pressed_keys.contains(&KeyCode::ArrowUp) {
            self.camera.dolly(DOLLY_SPEED * dt);
        }
        if self.pressed_keys.contains(&KeyCode::ArrowDown) {
            self.camera.dolly(-DOLLY_SPEED * dt);
        }

        match self.camera.mode {
            CameraMode::Static => {}
            CameraMode::Orbital => self.camera.orbit(dt),
            CameraMode::Free => {
                let forward = {
                    let f = self.camera.forward();
                    Vec3::new(f.x, 0.0, f.z).normalize_or_zero()
                };
                let right = self.camera.right();
                let mut movement = Vec3::ZERO;
                if self.pressed_keys.contains(&KeyCode::KeyW) {
                    movement += forward;
                }
                if self.pressed_keys.contains(&KeyCode::KeyS) {
                    movement -= forward;
                }
                if self.pressed_keys.contains(&KeyCode::KeyD) {
                    movement += right;
                }
                if self.pressed_keys.contains(&KeyCode::KeyA) {
                    movement -= right;
                }
                if movement.length_squared() > 0.0 {
                    movement = movement.normalize();
                }
                if self.pressed_keys.contains(&KeyCode::KeyQ) {
                    movement += Vec3::Y;
                }
                if self.pressed_keys.contains(&KeyCode::KeyE) {
                    movement -= Vec3::Y;
                }
                self.camera.free_move(movement * FREE_MOVE_SPEED * dt);
            }
        }
    }
}

fn create_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    camera_buffer: &wgpu::Buffer,
    scene_buffer: &wgpu::Buffer,
    balls_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("bind group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: scene_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: balls_buffer.as_entire_binding(),
            },
        ],
    })
}
