//! Turns a match snapshot into GPU instances

use crate::scoreboard::{score_rects, DigitStyle, Rect};
use game_core::{MatchSnapshot, PaddleView};
use glam::Vec2;

/// Paddles plus up to ten digits of seven segments per score
pub const MAX_RECT_INSTANCES: usize = 2 + 2 * 10 * 7;

/// Top edge of the score digits, in field units
const SCORE_TOP: f32 = 22.0;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![1 => Float32x4, 2 => Float32x4];

    /// One instance per step, after the mesh vertex at location 0
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }

    fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            transform: [center.x, center.y, size.x, size.y],
            tint: WHITE,
        }
    }
}

impl From<Rect> for InstanceData {
    fn from(rect: Rect) -> Self {
        Self::new(rect.center, rect.size)
    }
}

impl From<PaddleView> for InstanceData {
    fn from(paddle: PaddleView) -> Self {
        let size = Vec2::new(paddle.width, paddle.height);
        Self::new(Vec2::new(paddle.x, paddle.y) + size / 2.0, size)
    }
}

/// Everything drawn in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Drawn with the rectangle mesh: paddles first, then score segments
    pub rects: Vec<InstanceData>,
    /// Drawn with the circle mesh
    pub ball: InstanceData,
}

impl Scene {
    pub fn from_snapshot(snapshot: &MatchSnapshot, style: &DigitStyle) -> Self {
        let mut rects = vec![
            InstanceData::from(snapshot.left),
            InstanceData::from(snapshot.right),
        ];

        let width = snapshot.field_width;
        let scores = [
            (snapshot.score.left, width / 4.0),
            (snapshot.score.right, width * 0.75),
        ];
        for (value, center_x) in scores {
            rects.extend(
                score_rects(value, center_x, SCORE_TOP, style)
                    .into_iter()
                    .map(InstanceData::from),
            );
        }

        let diameter = snapshot.ball.radius * 2.0;
        let ball = InstanceData::new(
            Vec2::new(snapshot.ball.x, snapshot.ball.y),
            Vec2::splat(diameter),
        );

        Self { rects, ball }
    }
}
