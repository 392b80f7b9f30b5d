use crate::common::*;
use rand::RngCore;

/// Camera placement and lens, supplied once per render.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    pub look_from: Point3,
    pub look_at: Point3,
    pub vup: Vec3,
    /// Vertical field of view in degrees.
    pub vfov: f64,
    pub aspect_ratio: f64,
    /// Lens diameter; 0 gives a pinhole camera.
    pub aperture: f64,
    /// Distance to the plane in perfect focus.
    pub focus_dist: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            look_from: Point3::zero(),
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }
}

/// Thin-lens camera mapping viewport coordinates to world rays.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f64,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Result<Self> {
        if !(config.vfov > 0.0 && config.vfov < 180.0) {
            return Err(RenderError::InvalidSettings(format!(
                "vertical field of view must be in (0, 180) degrees, got {}",
                config.vfov
            )));
        }
        if !(config.aspect_ratio > 0.0 && config.aspect_ratio.is_finite()) {
            return Err(RenderError::InvalidSettings(format!(
                "aspect ratio must be positive, got {}",
                config.aspect_ratio
            )));
        }
        if !(config.aperture >= 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "aperture must be non-negative, got {}",
                config.aperture
            )));
        }
        if !(config.focus_dist > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "focus distance must be positive, got {}",
                config.focus_dist
            )));
        }

        let view = config.look_from - config.look_at;
        if view.near_zero() {
            return Err(RenderError::InvalidSettings(
                "look_from and look_at must differ".to_string(),
            ));
        }
        let w = view.normalized();
        let side = config.vup.cross(w);
        if side.near_zero() {
            return Err(RenderError::InvalidSettings(
                "up vector must not be parallel to the view direction".to_string(),
            ));
        }
        let u = side.normalized();
        let v = w.cross(u);

        let theta = degrees_to_radians(config.vfov);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = config.aspect_ratio * viewport_height;

        let origin = config.look_from;
        let horizontal = config.focus_dist * viewport_width * u;
        let vertical = config.focus_dist * viewport_height * v;
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - config.focus_dist * w;

        Ok(Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: config.aperture / 2.0,
        })
    }

    /// Ray through viewport point `(s, t)`, where `(0, 0)` is the lower-left
    /// and `(1, 1)` the upper-right corner of the focus plane.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * Vec3::random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;
        let ray_origin = self.origin + offset;

        Ray::new(
            ray_origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - ray_origin,
        )
    }
}
