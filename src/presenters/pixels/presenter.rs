use crate::adapters::pixel_format::copy_cells_to_rgba;
use crate::controllers::viewport::snapshot::FrameSnapshot;
use crate::core::data::point::Point;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    buffer_width: u32,
    buffer_height: u32,
    last_presented_generation: Option<u64>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        snapshot: &FrameSnapshot<'_>,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.maybe_upload_frame(snapshot);

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // HUD on top of the fractal
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    fn window_pos_to_pixel(&self, x: f64, y: f64) -> Point {
        // positions outside the frame still map onto the plane, so keep them
        let (px, py) = match self.pixels.window_pos_to_pixel((x as f32, y as f32)) {
            Ok((px, py)) => (px as isize, py as isize),
            Err(outside) => outside,
        };

        Point {
            x: px as i32,
            y: py as i32,
        }
    }
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        pixel_width: u32,
        pixel_height: u32,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(pixel_width, pixel_height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            buffer_width: pixel_width,
            buffer_height: pixel_height,
            last_presented_generation: None,
        })
    }

    /// Uploads the snapshot unless this generation is already on the surface.
    fn maybe_upload_frame(&mut self, snapshot: &FrameSnapshot<'_>) {
        if self.last_presented_generation == Some(snapshot.generation) {
            return;
        }

        if self.buffer_width != snapshot.width || self.buffer_height != snapshot.height {
            if let Err(err) = self.pixels.resize_buffer(snapshot.width, snapshot.height) {
                log::error!("could not resize pixel buffer: {}", err);
                return;
            }
            self.buffer_width = snapshot.width;
            self.buffer_height = snapshot.height;
        }

        copy_cells_to_rgba(snapshot.cells, self.pixels.frame_mut());
        self.last_presented_generation = Some(snapshot.generation);
    }
}
