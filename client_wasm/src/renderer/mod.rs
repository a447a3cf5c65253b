pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::error::ClientError;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use crate::scoreboard::DigitStyle;
use game_core::{Field, MatchSnapshot};
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
    pub meshes: (Mesh, Mesh), // rect, circle
    pub digit_style: DigitStyle,
}

impl Renderer {
    pub async fn new(canvas: web_sys::HtmlCanvasElement, field: &Field) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(field.width, field.height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        // Meshes
        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, 32);

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
            meshes: (rect_mesh, circle_mesh),
            digit_style: DigitStyle::default(),
        })
    }

    pub fn draw(&mut self, snapshot: &MatchSnapshot) -> Result<(), ClientError> {
        draw::draw_frame(self, snapshot)
    }
}
