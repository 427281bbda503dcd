use glam::{Mat4, Vec3};

// Keeps the polar angle off the poles so look_at never degenerates
const POLAR_EPS: f32 = 1e-6;
// Floor for the orbit radius when zoomed all the way in
const MIN_RADIUS: f32 = 1e-4;

/// Tuning for [`OrbitCamera`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSettings {
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of the pending motion applied per update; `None` applies all of it.
    pub damping_factor: Option<f32>,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
}

/// Perspective camera orbiting a target, driven by pointer deltas.
///
/// Angles follow the Y-up spherical convention: `theta` is the azimuth
/// measured from +Z towards +X, `phi` the polar angle from +Y. Input
/// accumulates into pending deltas that [`OrbitCamera::update`] applies once
/// per frame, so damping keeps the motion gliding after the pointer stops.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    settings: OrbitSettings,
    target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
    aspect: f32,
    // pending input
    delta_theta: f32,
    delta_phi: f32,
    pan_offset: Vec3,
    scale: f32,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, aspect: f32, settings: OrbitSettings) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let (theta, phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, std::f32::consts::FRAC_PI_2)
        };
        let mut camera = Self {
            settings,
            target,
            radius,
            theta,
            phi,
            aspect: aspect.max(1e-6),
            delta_theta: 0.0,
            delta_phi: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        };
        camera.radius = camera.clamp_radius(camera.radius);
        camera.phi = camera.clamp_phi(camera.phi);
        camera
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Queue a rotation from a pointer drag of `(dx, dy)` pixels on a
    /// viewport `viewport_height` pixels tall. A full-height drag turns 2π.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let k = std::f32::consts::TAU * self.settings.rotate_speed / h;
        self.delta_theta -= dx * k;
        self.delta_phi -= dy * k;
    }

    /// Queue a screen-space pan from a pointer drag of `(dx, dy)` pixels.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let half_fov = (self.settings.fovy_degrees.to_radians() * 0.5).tan();
        let target_distance = self.radius * half_fov;
        let (right, up) = self.screen_axes();
        let k = 2.0 * target_distance * self.settings.pan_speed / h;
        self.pan_offset += right * (-dx * k) + up * (dy * k);
    }

    /// Queue a zoom step. Negative `direction` moves towards the target.
    pub fn zoom(&mut self, direction: f32) {
        let step = 0.95_f32.powf(self.settings.zoom_speed);
        if direction < 0.0 {
            self.scale *= step;
        } else if direction > 0.0 {
            self.scale /= step;
        }
    }

    /// Apply pending input. Call once per frame.
    pub fn update(&mut self) {
        let factor = self.settings.damping_factor.unwrap_or(1.0).clamp(0.0, 1.0);

        self.theta += self.delta_theta * factor;
        self.phi = self.clamp_phi(self.phi + self.delta_phi * factor);
        self.target += self.pan_offset * factor;
        self.radius = self.clamp_radius(self.radius * self.scale);

        if self.settings.damping_factor.is_some() {
            self.delta_theta *= 1.0 - factor;
            self.delta_phi *= 1.0 - factor;
            self.pan_offset *= 1.0 - factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        self.target
            + Vec3::new(
                sin_phi_r * self.theta.sin(),
                self.phi.cos() * self.radius,
                sin_phi_r * self.theta.cos(),
            )
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    #[inline]
    pub fn azimuth(&self) -> f32 {
        self.theta
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.settings.fovy_degrees.to_radians(),
            self.aspect,
            self.settings.znear,
            self.settings.zfar,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    fn screen_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        (right, up)
    }

    fn clamp_radius(&self, r: f32) -> f32 {
        r.clamp(self.settings.min_distance, self.settings.max_distance)
            .max(MIN_RADIUS)
    }

    fn clamp_phi(&self, phi: f32) -> f32 {
        phi.clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS)
    }
}
