use egui_wgpu::ScreenDescriptor;
use nalgebra_glm as glm;

use crate::animation::FrameState;
use crate::model::GlobeModel;
use crate::renderer::renderer::{Globals, Renderer};
use crate::renderer::viewport::square_viewport;

impl Renderer {
    pub fn render(
        &mut self,
        frame: &FrameState,
        globe: Option<&GlobeModel>,
        show_graticule: bool,
        paint_jobs: Vec<egui::ClippedPrimitive>,
        textures_delta: egui::TexturesDelta,
        screen_descriptor: ScreenDescriptor,
    ) -> Result<(), wgpu::SurfaceError> {
        // Skip rendering while the window has no usable size (minimized)
        if self.config.width == 0 || self.config.height == 0 {
            return Ok(());
        }

        // The globe draws into a centered square per the sizing policy; the
        // projection aspect is therefore always 1.
        let (vx, vy, side) =
            square_viewport(self.config.width as f32, self.config.height as f32);

        let view_proj = frame.camera.view_proj(1.0);
        let yaw = globe.map(|g| g.yaw()).unwrap_or(0.0);
        let model = glm::rotation(yaw, &glm::vec3(0.0, 1.0, 0.0));

        let globals = Globals {
            view_proj: view_proj.into(),
            model: model.into(),
            light_pos: frame.light_position.into(),
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let depth_texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: self.config.width,
                height: self.config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let depth_view = depth_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Globe Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: self.background_color[0] as f64,
                            g: self.background_color[1] as f64,
                            b: self.background_color[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_viewport(vx, vy, side, side, 0.0, 1.0);
            render_pass.set_scissor_rect(vx as u32, vy as u32, side as u32, side as u32);

            if globe.is_some() && self.num_indices > 0 {
                render_pass.set_pipeline(&self.globe_pipeline);
                render_pass.set_bind_group(0, &self.globals_bind_group, &[]);
                render_pass.set_bind_group(1, &self.texture_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass
                    .set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..self.num_indices, 0, 0..1);

                if show_graticule && self.num_line_vertices > 0 {
                    render_pass.set_pipeline(&self.line_pipeline);
                    render_pass.set_bind_group(0, &self.globals_bind_group, &[]);
                    render_pass.set_vertex_buffer(0, self.line_vertex_buffer.slice(..));
                    render_pass.draw(0..self.num_line_vertices, 0..1);
                }
            }
        }

        // egui overlay over the full window
        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let mut egui_rpass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui render pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut egui_rpass, &paint_jobs, &screen_descriptor);
        }

        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
