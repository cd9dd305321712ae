use game_core::Config;
use web_sys::HtmlCanvasElement;
use wgpu::*;

use crate::surface::{pick_format, surface_config};

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
}

/// Bring up WebGPU on `canvas`, resizing the canvas to the playfield
pub async fn init_wgpu(canvas: HtmlCanvasElement, game: &Config) -> Result<WgpuContext, String> {
    let config_template = surface_config(
        TextureFormat::Bgra8UnormSrgb,
        game.playfield_width,
        game.playfield_height,
    );
    canvas.set_width(config_template.width);
    canvas.set_height(config_template.height);

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Failed to create surface: {:?}", e))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| "Failed to find adapter".to_string())?;

    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Pong Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: MemoryHints::Performance,
            },
            None,
        )
        .await
        .map_err(|e| format!("Failed to create device: {:?}", e))?;

    let format = pick_format(&surface.get_capabilities(&adapter).formats)?;
    let config = SurfaceConfiguration {
        format,
        ..config_template
    };
    surface.configure(&device, &config);

    log::info!(
        "WebGPU surface {}x{} ({:?})",
        config.width,
        config.height,
        format
    );

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
    })
}
