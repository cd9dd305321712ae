//! Surface setup and recovery shared by init and the frame loop

use wgpu::{
    CompositeAlphaMode, PresentMode, SurfaceConfiguration, SurfaceError, TextureFormat,
    TextureUsages,
};

/// What the frame loop does when the surface texture cannot be acquired
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceRecovery {
    /// Configure the surface again and skip this frame
    Reconfigure,
    /// Skip this frame only
    Skip,
    /// Stop rendering
    Fatal(String),
}

impl SurfaceRecovery {
    pub fn for_error(err: &SurfaceError) -> Self {
        match err {
            SurfaceError::Lost | SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
            SurfaceError::Timeout => SurfaceRecovery::Skip,
            other => SurfaceRecovery::Fatal(format!("Failed to get current texture: {:?}", other)),
        }
    }
}

/// Prefer an sRGB format so the clear colours match the tints
pub fn pick_format(formats: &[TextureFormat]) -> Result<TextureFormat, String> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
        .ok_or_else(|| "No surface formats available".to_string())
}

/// Surface sized to the playfield, one canvas pixel per playfield pixel
pub fn surface_config(format: TextureFormat, width: f32, height: f32) -> SurfaceConfiguration {
    SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width: (width.round() as u32).max(1),
        height: (height.round() as u32).max(1),
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    }
}
