use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

/// Vertex layout shared by the OBJ loader and the render pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub nrm: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                shader_location: 0,
                offset: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                shader_location: 1,
                offset: 12,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                shader_location: 2,
                offset: 24,
                format: wgpu::VertexFormat::Float32x2,
            },
        ],
    };
}

/// Mesh data on the CPU side, ready for buffer upload
#[derive(Debug, Clone)]
pub struct CpuMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Cumulative transform of a loaded model
///
/// Per-frame deltas are folded into absolute state here: rotation as a
/// matrix (post-multiplied, so deltas act in object space) and a uniform
/// scale factor. The model matrix is recomputed from both on demand.
#[derive(Debug, Clone, Copy)]
pub struct ModelTransform {
    rotation: Mat4,
    scale: f32,
}

impl ModelTransform {
    pub fn new() -> Self {
        Self {
            rotation: Mat4::IDENTITY,
            scale: 1.0,
        }
    }

    /// Fold a per-frame rotation delta (x, then y, then z axis) into the
    /// cumulative rotation
    pub fn apply_rotation_delta(&mut self, delta: Vec3) {
        if delta == Vec3::ZERO {
            return;
        }
        self.rotation = self.rotation
            * Mat4::from_rotation_x(delta.x)
            * Mat4::from_rotation_y(delta.y)
            * Mat4::from_rotation_z(delta.z);
    }

    /// Fold a per-frame uniform scale multiplier into the cumulative scale
    pub fn apply_scale_delta(&mut self, factor: f32) {
        self.scale *= factor;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Recompute the model matrix from the cumulative state
    pub fn matrix(&self) -> Mat4 {
        self.rotation * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded model: GPU buffers plus its cumulative transform
pub struct Model {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    pub transform: ModelTransform,
}

impl Model {
    pub fn upload(device: &wgpu::Device, mesh: &CpuMesh, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            transform: ModelTransform::new(),
        }
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn mats_close(a: Mat4, b: Mat4) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn fresh_transform_is_identity() {
        let transform = ModelTransform::new();
        assert!(mats_close(transform.matrix(), Mat4::IDENTITY));
        assert_eq!(transform.scale(), 1.0);
    }

    #[test]
    fn zero_delta_leaves_transform() {
        let mut transform = ModelTransform::new();
        transform.apply_rotation_delta(Vec3::new(0.3, -0.2, 0.1));
        let before = transform.matrix();

        transform.apply_rotation_delta(Vec3::ZERO);
        transform.apply_scale_delta(1.0);

        assert!(mats_close(transform.matrix(), before));
    }

    #[test]
    fn rotation_deltas_accumulate() {
        let mut step = ModelTransform::new();
        step.apply_rotation_delta(Vec3::new(0.1, 0.0, 0.0));
        step.apply_rotation_delta(Vec3::new(0.2, 0.0, 0.0));

        let mut single = ModelTransform::new();
        single.apply_rotation_delta(Vec3::new(0.3, 0.0, 0.0));

        assert!(mats_close(step.matrix(), single.matrix()));
    }

    #[test]
    fn scale_deltas_compound() {
        let mut transform = ModelTransform::new();
        transform.apply_scale_delta(2.0);
        transform.apply_scale_delta(1.5);

        assert!((transform.scale() - 3.0).abs() < EPS);

        transform.apply_scale_delta(1.0 / 3.0);
        assert!((transform.scale() - 1.0).abs() < EPS);
    }

    #[test]
    fn matrix_combines_rotation_then_scale() {
        let mut transform = ModelTransform::new();
        let angle = std::f32::consts::FRAC_PI_2;
        transform.apply_rotation_delta(Vec3::new(0.0, angle, 0.0));
        transform.apply_scale_delta(2.0);

        // A +X point rotated 90 degrees about Y lands on -Z, doubled
        let p = transform.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-4);
    }

    #[test]
    fn vertex_layout_matches_struct() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(Vertex::LAYOUT.array_stride, 32);
        assert_eq!(Vertex::LAYOUT.attributes.len(), 3);
    }
}
