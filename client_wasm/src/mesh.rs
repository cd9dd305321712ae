//! Mesh generation for Pong
//!
//! A single unit quad; instances scale it to paddles, ball and centre line

use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

/// Quad covering (0, 0) to (1, 1)
pub fn create_unit_quad() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex { position: [0.0, 0.0] },
        Vertex { position: [1.0, 0.0] },
        Vertex { position: [1.0, 1.0] },
        Vertex { position: [0.0, 1.0] },
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];

    (vertices, indices)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    pub fn unit_quad(device: &Device) -> Self {
        let (vertices, indices) = create_unit_quad();
        Self::new(device, &vertices, &indices)
    }
}
