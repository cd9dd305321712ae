pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::Mesh;
use crate::scene::InstanceData;
use game_core::{Config, View};
use resources::GameBuffers;
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub quad: Mesh,

    /// Instances uploaded last frame
    pub last_instances: Vec<InstanceData>,
}

impl Renderer {
    /// Renderer whose surface and camera span the configured playfield
    pub async fn new(canvas: web_sys::HtmlCanvasElement, game: &Config) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas, game).await?;
        let camera = Camera::orthographic(game.playfield_width, game.playfield_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);
        let quad = Mesh::unit_quad(&ctx.device);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            quad,
            last_instances: Vec::new(),
        })
    }

    pub fn draw(&mut self, view: &View) -> Result<(), String> {
        draw::draw_frame(self, view)
    }
}
