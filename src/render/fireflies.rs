use super::helpers::{self, PipelineSpec};
use crate::core::{FireflyField, FIREFLIES_WGSL};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FireflyInstance {
    pub(crate) position: [f32; 3],
    pub(crate) scale: f32,
}

impl FireflyInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<FireflyInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FirefliesUniforms {
    pub(crate) time: f32,
    pub(crate) size: f32,
    pub(crate) pixel_ratio: f32,
    pub(crate) _pad: f32,
}

pub(crate) struct FirefliesResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    instances: Option<(wgpu::Buffer, u32)>,
}

pub(crate) fn create_fireflies_resources(
    device: &wgpu::Device,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
) -> FirefliesResources {
    let shader = helpers::create_shader(device, "fireflies_shader", FIREFLIES_WGSL);
    let bgl = helpers::uniform_bind_group_layout(
        device,
        "fireflies_bgl",
        wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
    );
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("fireflies_pl"),
        bind_group_layouts: &[globals_bgl, &bgl],
        push_constant_ranges: &[],
    });
    // Additive: src * alpha + dst
    let additive = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    };
    let pipeline = helpers::make_pipeline(
        device,
        &PipelineSpec {
            label: "fireflies_pipeline",
            layout: &layout,
            shader: &shader,
            vs_entry: "vs_fireflies",
            fs_entry: "fs_fireflies",
            vertex_buffers: &[FireflyInstance::layout()],
            color_format,
            blend: Some(wgpu::BlendState {
                color: additive,
                alpha: additive,
            }),
            cull_mode: None,
            depth_write: false,
            sample_count,
        },
    );
    let uniform_buffer = helpers::create_uniform_buffer(
        device,
        "fireflies_uniforms",
        &FirefliesUniforms {
            time: 0.0,
            size: 0.0,
            pixel_ratio: 1.0,
            _pad: 0.0,
        },
    );
    let bind_group = helpers::uniform_bind_group(device, "fireflies_bg", &bgl, &uniform_buffer);

    FirefliesResources {
        pipeline,
        uniform_buffer,
        bind_group,
        instances: None,
    }
}

impl FirefliesResources {
    /// Upload the field once; it never changes afterwards.
    pub(crate) fn upload(&mut self, device: &wgpu::Device, field: &FireflyField) {
        if field.is_empty() {
            self.instances = None;
            return;
        }
        let instances: Vec<FireflyInstance> = field
            .iter()
            .map(|(position, scale)| FireflyInstance { position, scale })
            .collect();
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fireflies_instances"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX,
        });
        self.instances = Some((buffer, instances.len() as u32));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if let Some((buffer, count)) = &self.instances {
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(1, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, buffer.slice(..));
            rpass.draw(0..6, 0..*count);
        }
    }
}
