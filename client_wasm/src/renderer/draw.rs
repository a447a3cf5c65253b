use super::Renderer;
use crate::error::ClientError;
use crate::scene::Scene;
use game_core::MatchSnapshot;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, snapshot: &MatchSnapshot) -> Result<(), ClientError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Reconfigure and try again next frame
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            log::warn!("Surface timeout, skipping frame");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let scene = Scene::from_snapshot(snapshot, &renderer.digit_style);
    update_buffers(renderer, &scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, scene.rects.len() as u32);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &Renderer, scene: &Scene) {
    renderer
        .queue
        .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(scene.rects.as_slice()));
    renderer
        .queue
        .write_buffer(&renderer.buffers.ball, 0, bytemuck::cast_slice(&[scene.ball]));
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>, rect_count: u32) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (paddles, score segments)
    let (rect, circle) = &renderer.meshes;
    pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
    pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
    pass.draw_indexed(0..rect.index_count, 0, 0..rect_count);

    // Circle (ball)
    pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
    pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.ball.slice(..));
    pass.draw_indexed(0..circle.index_count, 0, 0..1);
}
