use super::helpers;
use wgpu;

/// Multisampled attachments for the scene pass.
///
/// - `color_*` is resolved into the swapchain image at the end of the pass.
/// - `depth_*` is `Depth32Float` with the same sample count.
///
/// Both are sized to the surface and rebuilt on resize.
pub(crate) struct RenderTargets {
    pub(crate) color_tex: wgpu::Texture,
    pub(crate) color_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (color_tex, color_view) = helpers::create_attachment_texture(
            device,
            "msaa_color",
            width,
            height,
            format,
            sample_count,
        );
        let (depth_tex, depth_view) = helpers::create_attachment_texture(
            device,
            "depth",
            width,
            height,
            helpers::DEPTH_FORMAT,
            sample_count,
        );
        Self {
            color_tex,
            color_view,
            depth_tex,
            depth_view,
            format,
            sample_count,
        }
    }

    #[inline]
    pub(crate) fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    #[inline]
    pub(crate) fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.format, self.sample_count);
    }
}
