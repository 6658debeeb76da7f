//! GPU buffers for the surface mesh and wave uniforms.
//!
//! Handles are owned explicitly and bound by the caller inside its own render
//! pass; nothing here relies on a globally "current" buffer.

use wgpu::util::DeviceExt;

use crate::error::GpuError;
use crate::ocean::{OceanSystem, SurfaceMesh, Vertex, WaveUniforms};

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
    wgpu::VertexAttribute {
        offset: 0,
        shader_location: 0,
        format: wgpu::VertexFormat::Float32x3,
    },
    wgpu::VertexAttribute {
        offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
        shader_location: 1,
        format: wgpu::VertexFormat::Float32x2,
    },
];

/// Vertex buffer layout matching `Vertex`
pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

/// Bind group layout entry for the wave uniform block
///
/// Visible to vertex and fragment stages; tessellation backends read it
/// from the vertex stage.
pub fn wave_uniform_layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

/// Whether a vertex buffer uploaded at `uploaded_generation` is stale for `mesh`
pub fn mesh_upload_needed(uploaded_generation: u64, mesh: &SurfaceMesh) -> bool {
    mesh.generation() != uploaded_generation
}

/// Surface vertex buffer and wave uniform buffer
pub struct SurfaceBuffers {
    vertex_buffer: wgpu::Buffer,
    wave_buffer: wgpu::Buffer,
    vertex_count: u32,
    mesh_generation: u64,
}

impl SurfaceBuffers {
    /// Upload the current mesh and wave block
    pub fn new(device: &wgpu::Device, ocean: &OceanSystem, time: f32) -> Self {
        let wave_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wave Uniform Buffer"),
            contents: bytemuck::cast_slice(&[ocean.wave_uniforms(time)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            vertex_buffer: create_vertex_buffer(device, &ocean.mesh().vertices),
            wave_buffer,
            vertex_count: ocean.mesh().draw_count(),
            mesh_generation: ocean.mesh().generation(),
        }
    }

    /// Per-frame upload
    ///
    /// The wave block is rewritten every frame (time and any edits). The
    /// vertex buffer is recreated only when the mesh was rebuilt since the
    /// last sync. Returns whether that happened.
    pub fn sync(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        ocean: &OceanSystem,
        time: f32,
    ) -> bool {
        let uniforms: WaveUniforms = ocean.wave_uniforms(time);
        queue.write_buffer(&self.wave_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        let mesh = ocean.mesh();
        if !mesh_upload_needed(self.mesh_generation, mesh) {
            return false;
        }

        self.vertex_buffer = create_vertex_buffer(device, &mesh.vertices);
        self.vertex_count = mesh.draw_count();
        self.mesh_generation = mesh.generation();
        log::debug!(
            "Re-uploaded surface mesh generation {} ({} vertices)",
            self.mesh_generation,
            self.vertex_count
        );
        true
    }

    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    pub fn wave_buffer(&self) -> &wgpu::Buffer {
        &self.wave_buffer
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

fn create_vertex_buffer(device: &wgpu::Device, vertices: &[Vertex]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Surface Vertex Buffer"),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}

/// Acquire a device without a presentation surface
pub async fn headless_device() -> Result<(wgpu::Device, wgpu::Queue), GpuError> {
    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .ok_or(GpuError::NoAdapter)?;

    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Ocean Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: Default::default(),
            },
            None,
        )
        .await?;

    log::info!("Using GPU adapter: {}", adapter.get_info().name);
    Ok((device, queue))
}
