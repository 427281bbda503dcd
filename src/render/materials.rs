use super::helpers::{self, PipelineSpec};
use super::meshes::MeshVertex;
use crate::core::{Material, MaterialParams, BAKED_WGSL, FLAT_WGSL, PORTAL_WGSL};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FlatUniforms {
    pub(crate) color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PortalUniforms {
    pub(crate) center_color: [f32; 4],
    pub(crate) border_color: [f32; 4],
    pub(crate) time: f32,
    pub(crate) _pad: [f32; 3],
}

impl PortalUniforms {
    fn from_params(params: &MaterialParams, time: f32) -> Self {
        Self {
            center_color: params.portal_center_color.to_linear_rgba(),
            border_color: params.portal_border_color.to_linear_rgba(),
            time,
            _pad: [0.0; 3],
        }
    }
}

/// Pipelines and bind groups for the three mesh materials.
///
/// The baked bind group only exists once the lightmap is uploaded; meshes
/// using it are skipped until then.
pub(crate) struct MaterialResources {
    baked_pipeline: wgpu::RenderPipeline,
    flat_pipeline: wgpu::RenderPipeline,
    portal_pipeline: wgpu::RenderPipeline,

    baked_bgl: wgpu::BindGroupLayout,
    baked_sampler: wgpu::Sampler,
    baked_bind_group: Option<wgpu::BindGroup>,

    flat_buffer: wgpu::Buffer,
    flat_bind_group: wgpu::BindGroup,
    portal_buffer: wgpu::Buffer,
    portal_bind_group: wgpu::BindGroup,
}

pub(crate) fn create_material_resources(
    device: &wgpu::Device,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
    params: &MaterialParams,
) -> MaterialResources {
    let baked_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("baked_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let flat_bgl = helpers::uniform_bind_group_layout(device, "flat_bgl", wgpu::ShaderStages::FRAGMENT);
    let portal_bgl =
        helpers::uniform_bind_group_layout(device, "portal_bgl", wgpu::ShaderStages::FRAGMENT);

    let baked_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("baked_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });

    let flat_buffer = helpers::create_uniform_buffer(
        device,
        "flat_uniforms",
        &FlatUniforms {
            color: params.pole_light_color.to_linear_rgba(),
        },
    );
    let flat_bind_group = helpers::uniform_bind_group(device, "flat_bg", &flat_bgl, &flat_buffer);
    let portal_buffer = helpers::create_uniform_buffer(
        device,
        "portal_uniforms",
        &PortalUniforms::from_params(params, 0.0),
    );
    let portal_bind_group =
        helpers::uniform_bind_group(device, "portal_bg", &portal_bgl, &portal_buffer);

    let vertex_buffers = [MeshVertex::layout()];
    let make = |label: &str, material_bgl: &wgpu::BindGroupLayout, body: &str, fs_entry: &str| {
        let shader = helpers::create_shader(device, label, body);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[globals_bgl, material_bgl],
            push_constant_ranges: &[],
        });
        helpers::make_pipeline(
            device,
            &PipelineSpec {
                label,
                layout: &layout,
                shader: &shader,
                vs_entry: "vs_mesh",
                fs_entry,
                vertex_buffers: &vertex_buffers,
                color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                cull_mode: Some(wgpu::Face::Back),
                depth_write: true,
                sample_count,
            },
        )
    };
    let baked_pipeline = make("baked_pipeline", &baked_bgl, BAKED_WGSL, "fs_baked");
    let flat_pipeline = make("flat_pipeline", &flat_bgl, FLAT_WGSL, "fs_flat");
    let portal_pipeline = make("portal_pipeline", &portal_bgl, PORTAL_WGSL, "fs_portal");

    MaterialResources {
        baked_pipeline,
        flat_pipeline,
        portal_pipeline,
        baked_bgl,
        baked_sampler,
        baked_bind_group: None,
        flat_buffer,
        flat_bind_group,
        portal_buffer,
        portal_bind_group,
    }
}

impl MaterialResources {
    pub(crate) fn set_baked_texture(&mut self, device: &wgpu::Device, view: &wgpu::TextureView) {
        self.baked_bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("baked_bg"),
            layout: &self.baked_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.baked_sampler),
                },
            ],
        }));
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, params: &MaterialParams, portal_time: f32) {
        let flat = FlatUniforms {
            color: params.pole_light_color.to_linear_rgba(),
        };
        queue.write_buffer(&self.flat_buffer, 0, bytemuck::bytes_of(&flat));
        let portal = PortalUniforms::from_params(params, portal_time);
        queue.write_buffer(&self.portal_buffer, 0, bytemuck::bytes_of(&portal));
    }

    /// Set pipeline and material bind group (group 1). Returns `false` when
    /// the material is not ready to draw.
    pub(crate) fn bind(&self, rpass: &mut wgpu::RenderPass<'_>, material: Material) -> bool {
        match material {
            Material::Baked => match &self.baked_bind_group {
                Some(bg) => {
                    rpass.set_pipeline(&self.baked_pipeline);
                    rpass.set_bind_group(1, bg, &[]);
                    true
                }
                None => false,
            },
            Material::PoleLight => {
                rpass.set_pipeline(&self.flat_pipeline);
                rpass.set_bind_group(1, &self.flat_bind_group, &[]);
                true
            }
            Material::Portal => {
                rpass.set_pipeline(&self.portal_pipeline);
                rpass.set_bind_group(1, &self.portal_bind_group, &[]);
                true
            }
        }
    }
}
