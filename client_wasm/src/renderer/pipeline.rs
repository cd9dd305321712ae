use super::shaders::PONG_SHADER;
use crate::mesh::Vertex;
use crate::scene::InstanceData;
use wgpu::*;

pub struct PipelineState {
    pub main_pipeline: RenderPipeline,
    pub camera_layout: BindGroupLayout,
}

pub fn create_pipelines(device: &Device, format: TextureFormat) -> PipelineState {
    // 1. Camera Bind Group Layout
    let camera_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Camera Bind Group Layout"),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility: ShaderStages::VERTEX,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    // 2. Main Pipeline
    let shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("Pong Shader"),
        source: ShaderSource::Wgsl(PONG_SHADER.into()),
    });

    let main_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Render Pipeline Layout"),
        bind_group_layouts: &[&camera_layout],
        push_constant_ranges: &[],
    });

    let vertex_buffer_layout = VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: VertexStepMode::Vertex,
        attributes: &[VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: VertexFormat::Float32x2,
        }],
    };

    let vec4_size = std::mem::size_of::<[f32; 4]>() as u64;
    let instance_buffer_layout = VertexBufferLayout {
        array_stride: std::mem::size_of::<InstanceData>() as u64,
        step_mode: VertexStepMode::Instance,
        attributes: &[
            VertexAttribute {
                offset: 0,
                shader_location: 1,
                format: VertexFormat::Float32x4, // transform
            },
            VertexAttribute {
                offset: vec4_size,
                shader_location: 2,
                format: VertexFormat::Float32x4, // tint
            },
            VertexAttribute {
                offset: vec4_size * 2,
                shader_location: 3,
                format: VertexFormat::Float32x4, // shape
            },
        ],
    };

    let main_pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some("Render Pipeline"),
        layout: Some(&main_layout),
        vertex: VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_buffer_layout, instance_buffer_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::REPLACE),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    PipelineState {
        main_pipeline,
        camera_layout,
    }
}
