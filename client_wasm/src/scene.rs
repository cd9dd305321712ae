//! Per-frame instance list built from the game view

use game_core::{FrameView, Rect, View};

pub const BACKGROUND: [f64; 4] = [0.047, 0.047, 0.047, 1.0];
pub const MENU_BACKGROUND: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
pub const PADDLE_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
pub const BALL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const LINE_WIDTH: f32 = 2.0;

/// Upper bound on instances in one frame
pub const MAX_INSTANCES: usize = 4;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height (top-left origin)
    pub tint: [f32; 4],      // rgba
    pub shape: [f32; 4],     // x: 1.0 masks the quad to an ellipse
}

impl InstanceData {
    pub fn rect(bounds: Rect, tint: [f32; 4]) -> Self {
        Self {
            transform: [bounds.left(), bounds.top(), bounds.width(), bounds.height()],
            tint,
            shape: [0.0; 4],
        }
    }

    pub fn ellipse(bounds: Rect, tint: [f32; 4]) -> Self {
        Self {
            shape: [1.0, 0.0, 0.0, 0.0],
            ..Self::rect(bounds, tint)
        }
    }
}

/// Clear colour and instances for a view
pub fn build(view: &View) -> ([f64; 4], Vec<InstanceData>) {
    match view {
        View::Frame(frame) => (BACKGROUND, frame_instances(frame)),
        View::Menu(_) | View::Exited => (MENU_BACKGROUND, Vec::new()),
    }
}

fn frame_instances(frame: &FrameView) -> Vec<InstanceData> {
    let playfield = frame.playfield;
    let line = Rect::new(
        playfield.center().x - LINE_WIDTH / 2.0,
        playfield.top(),
        LINE_WIDTH,
        playfield.height(),
    );

    vec![
        InstanceData::rect(line, LINE_COLOR),
        InstanceData::rect(frame.right, PADDLE_COLOR),
        InstanceData::rect(frame.left, PADDLE_COLOR),
        InstanceData::ellipse(frame.ball, BALL_COLOR),
    ]
}
