//! Text HUD drawn as an egui overlay on top of the raymarched scene.

use std::sync::Arc;

use physics::SimConfig;
use winit::window::Window;

use crate::camera::CameraMode;

/// Egui plumbing: context, winit translation and wgpu paint renderer.
pub struct EguiHud {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Tessellated output of one HUD frame.
pub struct HudFrame {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

impl EguiHud {
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Arc<Window>,
    ) -> Self {
        let ctx = egui::Context::default();

        // Light theme over the near-white scene; no floating shadows.
        let mut style = egui::Style::default();
        style.visuals = egui::Visuals::light();
        style.visuals.window_shadow = egui::epaint::Shadow::NONE;
        style.visuals.popup_shadow = egui::epaint::Shadow::NONE;
        ctx.set_style(style);

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
        );

        let renderer = egui_wgpu::Renderer::new(device, output_format, None, 1);

        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Feed a winit event through egui. Returns true when egui consumed it.
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run the HUD UI for this frame and tessellate it.
    pub fn run(&mut self, window: &Window, overlay: &HudOverlay) -> HudFrame {
        let raw_input = self.state.take_egui_input(window);
        self.ctx.begin_frame(raw_input);

        overlay.draw(&self.ctx);

        let full_output = self.ctx.end_frame();
        self.state
            .handle_platform_output(window, full_output.platform_output);
        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        HudFrame {
            paint_jobs,
            textures_delta: full_output.textures_delta,
            pixels_per_point: full_output.pixels_per_point,
        }
    }

    /// Upload textures and buffers ahead of the render pass. Any command
    /// buffers produced by paint callbacks must be submitted before the
    /// pass that paints the HUD.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        frame: &HudFrame,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) -> Vec<wgpu::CommandBuffer> {
        for (id, image_delta) in &frame.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &frame.paint_jobs,
            screen_descriptor,
        )
    }

    /// Paint the tessellated HUD into an open render pass.
    pub fn render<'rp>(
        &'rp self,
        rpass: &mut wgpu::RenderPass<'rp>,
        frame: &'rp HudFrame,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) {
        self.renderer
            .render(rpass, &frame.paint_jobs, screen_descriptor);
    }

    /// Free textures retired by this frame.
    pub fn cleanup(&mut self, frame: &HudFrame) {
        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

/// Everything the HUD prints for one frame.
pub struct HudOverlay {
    pub restitution: f32,
    pub max_speed: f32,
    pub ball_count: usize,
    pub cube_size: f32,
    pub camera_mode: CameraMode,
}

impl HudOverlay {
    #[must_use]
    pub fn new(config: &SimConfig, camera_mode: CameraMode) -> Self {
        Self {
            restitution: config.restitution,
            max_speed: config.max_speed,
            ball_count: config.ball_count,
            cube_size: config.cube_size,
            camera_mode,
        }
    }

    fn draw(&self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("hud"))
            .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
            .interactable(false)
            .show(ctx, |ui| {
                let status = format!(
                    "Cr: {:.2} | Vel: {:.1} | Balls: {} | Cube: {:.1}",
                    self.restitution, self.max_speed, self.ball_count, self.cube_size
                );
                let camera = format!(
                    "Camera: {} (C) | Zoom: Up/Down",
                    self.camera_mode.label()
                );
                ui.label(hud_text(&status, 16.0));
                ui.label(hud_text(&camera, 14.0));
                ui.label(hud_text(
                    "W/S: forward/back | A/D: left/right | Q/E: up/down | G: grid",
                    14.0,
                ));
            });
    }
}

fn hud_text(text: &str, size: f32) -> egui::RichText {
    egui::RichText::new(text)
        .monospace()
        .size(size)
        .color(egui::Color32::DARK_GRAY)
}
