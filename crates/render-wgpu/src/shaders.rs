/// WGSL shader for lit meshes: the spinning cube and the segment midpoint markers.
pub const MESH_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    light_position: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_position = world_pos.xyz;
    out.world_normal = normalize((model * vec4<f32>(vertex.normal, 0.0)).xyz);
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let light_dir = normalize(uniforms.light_position.xyz - in.world_position);
    let ambient = 0.35;
    let diffuse = max(dot(in.world_normal, light_dir), 0.0);
    let lighting = min(ambient + diffuse * 0.75, 1.0);
    return vec4<f32>(in.color.rgb * lighting, in.color.a);
}
"#;

/// WGSL shader for drawn segment lines.
pub const LINE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    light_position: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct LineVertex {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
};

struct LineOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_line(vertex: LineVertex) -> LineOutput {
    var out: LineOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(vertex.position, 1.0);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_line(in: LineOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

/// WGSL shader for the wave plane.
///
/// Must stay in step with `sceneswitch_render::scenes::wave_offset` and
/// `wave_color`.
pub const WAVE_SHADER: &str = r#"
struct WaveUniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    time: f32,
    height: f32,
    _pad: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> wave: WaveUniforms;

struct PlaneVertex {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

struct WaveOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

fn wave_phase(uv: vec2<f32>) -> f32 {
    let d = length(uv - vec2<f32>(0.5, 0.5));
    return d * 15.0 - wave.time * 3.0;
}

@vertex
fn vs_wave(vertex: PlaneVertex) -> WaveOutput {
    var pos = vertex.position;
    pos.z += sin(wave_phase(vertex.uv)) * wave.height + 0.5;

    var out: WaveOutput;
    out.clip_position = wave.view_proj * wave.model * vec4<f32>(pos, 1.0);
    out.uv = vertex.uv;
    return out;
}

@fragment
fn fs_wave(in: WaveOutput) -> @location(0) vec4<f32> {
    let intensity = sin(wave_phase(in.uv)) * 0.5 + 0.5;
    let color = vec3<f32>(0.2, 0.6, 1.0) * intensity;
    return vec4<f32>(color, 1.0);
}
"#;
