use crate::assets::{MeshData, TextureData};
use crate::constants::MSAA_SAMPLES;
use crate::core::{AnimationScalars, FireflyField, Material, MaterialParams};
use glam::Mat4;
use web_sys as web;

mod fireflies;
mod helpers;
mod materials;
mod meshes;
mod targets;

use fireflies::{create_fireflies_resources, FirefliesResources, FirefliesUniforms};
use materials::{create_material_resources, MaterialResources};
use meshes::GpuMesh;
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    fog_color: [f32; 4],
    fog: [f32; 4],
    viewport: [f32; 4],
}

/// Everything the renderer samples for one frame.
pub struct FrameInputs<'a> {
    pub view: Mat4,
    pub projection: Mat4,
    pub scalars: AnimationScalars,
    pub params: &'a MaterialParams,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    materials: MaterialResources,
    fireflies: FirefliesResources,
    meshes: Vec<GpuMesh>,
    // Keeps the lightmap alive for the baked bind group
    baked_texture: Option<wgpu::Texture>,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, params: &MaterialParams) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let info = adapter.get_info();
        log::info!("[gpu] adapter={} backend={:?}", info.name, info.backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        // Canvas formats are usually plain unorm; draw through an sRGB view of them
        let caps = surface.get_capabilities(&adapter);
        let surface_format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let render_format = surface_format.add_srgb_suffix();
        let view_formats = if render_format != surface_format {
            vec![render_format]
        } else {
            vec![]
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats,
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sample_count = if adapter
            .get_texture_format_features(render_format)
            .flags
            .sample_count_supported(MSAA_SAMPLES)
        {
            MSAA_SAMPLES
        } else {
            1
        };
        log::info!(
            "[gpu] surface={:?} view={:?} msaa={}x {}x{}",
            surface_format,
            render_format,
            sample_count,
            width,
            height
        );
        let targets = RenderTargets::new(&device, width, height, render_format, sample_count);

        let globals_bgl = helpers::uniform_bind_group_layout(
            &device,
            "globals_bgl",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let globals_buffer = helpers::create_uniform_buffer(
            &device,
            "globals",
            &GlobalUniforms::zeroed_with_viewport(width, height, params.pixel_ratio),
        );
        let globals_bind_group =
            helpers::uniform_bind_group(&device, "globals_bg", &globals_bgl, &globals_buffer);

        let materials =
            create_material_resources(&device, &globals_bgl, render_format, sample_count, params);
        let fireflies = create_fireflies_resources(&device, &globals_bgl, render_format, sample_count);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            globals_buffer,
            globals_bind_group,
            materials,
            fireflies,
            meshes: Vec::new(),
            baked_texture: None,
            width,
            height,
        })
    }

    /// Upload the resolved model meshes with their materials, plus the lightmap.
    pub fn upload_model(&mut self, assigned: &[(Material, &MeshData)], lightmap: &TextureData) {
        let (texture, view) = helpers::create_srgb_texture(
            &self.device,
            &self.queue,
            "baked_lightmap",
            lightmap.width,
            lightmap.height,
            &lightmap.rgba,
        );
        self.materials.set_baked_texture(&self.device, &view);
        self.baked_texture = Some(texture);

        self.meshes = assigned
            .iter()
            .map(|(material, mesh)| {
                log::info!(
                    "[gpu] mesh `{}` verts={} tris={} material={:?}",
                    mesh.name,
                    mesh.positions.len(),
                    mesh.indices.len() / 3,
                    material
                );
                GpuMesh::upload(&self.device, *material, mesh)
            })
            .collect();
    }

    pub fn upload_fireflies(&mut self, field: &FireflyField) {
        self.fireflies.upload(&self.device, field);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, inputs: &FrameInputs<'_>) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure and try again next frame
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.targets.format()),
            ..Default::default()
        });

        let params = inputs.params;
        let globals = GlobalUniforms {
            view_proj: (inputs.projection * inputs.view).to_cols_array_2d(),
            view: inputs.view.to_cols_array_2d(),
            fog_color: params.fog_color.to_linear_rgba(),
            fog: [params.fog_near, params.fog_far, 0.0, 0.0],
            viewport: [
                self.width as f32,
                self.height as f32,
                params.pixel_ratio,
                0.0,
            ],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        self.materials
            .write_uniforms(&self.queue, params, inputs.scalars.portal_time);
        let fu = FirefliesUniforms {
            time: inputs.scalars.fireflies_time,
            size: params.fireflies_size,
            pixel_ratio: params.pixel_ratio,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.fireflies.uniform_buffer, 0, bytemuck::bytes_of(&fu));

        let [r, g, b] = params.clear_color.to_linear();
        let clear = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };
        let multisampled = self.targets.sample_count() > 1;
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: if multisampled {
                        &self.targets.color_view
                    } else {
                        &view
                    },
                    resolve_target: if multisampled { Some(&view) } else { None },
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: if multisampled {
                            wgpu::StoreOp::Discard
                        } else {
                            wgpu::StoreOp::Store
                        },
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            // Opaque meshes first, then the additive fireflies over them
            for mesh in &self.meshes {
                if self.materials.bind(&mut rpass, mesh.material) {
                    mesh.draw(&mut rpass);
                }
            }
            self.fireflies.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl GlobalUniforms {
    fn zeroed_with_viewport(width: u32, height: u32, pixel_ratio: f32) -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            fog_color: [0.0; 4],
            fog: [0.0; 4],
            viewport: [width as f32, height as f32, pixel_ratio, 0.0],
        }
    }
}
