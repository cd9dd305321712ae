use super::Renderer;
use crate::scene::{self, InstanceData, MAX_INSTANCES};
use crate::surface::SurfaceRecovery;
use game_core::View;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, view: &View) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(err) => {
            return match SurfaceRecovery::for_error(&err) {
                SurfaceRecovery::Reconfigure => {
                    log::warn!("surface {:?}, reconfiguring", err);
                    renderer
                        .surface
                        .configure(&renderer.device, &renderer.surface_config);
                    Ok(())
                }
                SurfaceRecovery::Skip => Ok(()),
                SurfaceRecovery::Fatal(message) => Err(message),
            };
        }
    };
    let target = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let (clear, instances) = scene::build(view);
    let count = update_buffers(renderer, &instances);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &target,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: clear[0],
                        g: clear[1],
                        b: clear[2],
                        a: clear[3],
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Upload this frame's instances, skipping the write when nothing moved
fn update_buffers(renderer: &mut Renderer, instances: &[InstanceData]) -> u32 {
    let instances = &instances[..instances.len().min(MAX_INSTANCES)];
    if renderer.last_instances.as_slice() != instances {
        if !instances.is_empty() {
            renderer.queue.write_buffer(
                &renderer.buffers.instances,
                0,
                bytemuck::cast_slice(instances),
            );
        }
        renderer.last_instances = instances.to_vec();
    }
    instances.len() as u32
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..renderer.quad.index_count, 0, 0..count);
}
