/// Instanced quad shader: paddles and centre line as rectangles, the ball as
/// an ellipse masked out of its bounding box
pub const PONG_SHADER: &str = r#"
struct Camera {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

struct VertexInput {
    @location(0) position: vec2<f32>,
};

struct InstanceInput {
    @location(1) transform: vec4<f32>,
    @location(2) tint: vec4<f32>,
    @location(3) shape: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) local: vec2<f32>,
    @location(1) tint: vec4<f32>,
    @location(2) ellipse: f32,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let world = instance.transform.xy + vertex.position * instance.transform.zw;

    var out: VertexOutput;
    out.clip_position = camera.view_proj * vec4<f32>(world, 0.0, 1.0);
    out.local = vertex.position * 2.0 - vec2<f32>(1.0, 1.0);
    out.tint = instance.tint;
    out.ellipse = instance.shape.x;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    if (in.ellipse > 0.5 && dot(in.local, in.local) > 1.0) {
        discard;
    }
    return in.tint;
}
"#;
