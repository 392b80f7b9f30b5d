use crate::common::*;
use rand::RngCore;

/// How a surface redirects light.
///
/// `scatter` returns the attenuation and the continuing ray, or `None`
/// when the ray is absorbed. All randomness comes from `rng`.
pub trait Material: Send + Sync {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore)
    -> Option<(Color, Ray)>;
}

/// Ideal diffuse surface.
#[derive(Debug, Clone, Copy)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _r_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        let mut scatter_direction = rec.normal + Vec3::random_unit_vector(rng);
        // Catch degenerate scatter direction
        if scatter_direction.near_zero() {
            scatter_direction = rec.normal;
        }
        Some((self.albedo, Ray::new(rec.p, scatter_direction)))
    }
}

/// Specular reflector; `fuzz` in [0, 1] blurs the reflection.
#[derive(Debug, Clone, Copy)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// `fuzz` is clamped into [0, 1].
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn fuzz(&self) -> f64 {
        self.fuzz
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        r_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        let mut reflected = Vec3::reflect(&r_in.dir.normalized(), &rec.normal);
        if self.fuzz > 0.0 {
            reflected += self.fuzz * Vec3::random_in_unit_sphere(rng);
        }
        if reflected.dot(rec.normal) <= 0.0 {
            return None;
        }
        Some((self.albedo, Ray::new(rec.p, reflected)))
    }
}

/// Clear refractive material (glass, water). Never absorbs.
#[derive(Debug, Clone, Copy)]
pub struct Dielectric {
    refractive_index: f64,
}

impl Dielectric {
    pub fn new(refractive_index: f64) -> Result<Self> {
        if !refractive_index.is_finite() || refractive_index <= 0.0 {
            return Err(RenderError::InvalidRefractiveIndex(refractive_index));
        }
        Ok(Self { refractive_index })
    }

    pub fn refractive_index(&self) -> f64 {
        self.refractive_index
    }

    /// Schlick's approximation of the angle-dependent reflectance.
    pub fn reflectance(cosine: f64, refractive_index: f64) -> f64 {
        let r0 = ((1.0 - refractive_index) / (1.0 + refractive_index)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        r_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        let refraction_ratio = if rec.front_face {
            self.refractive_index
        } else {
            1.0 / self.refractive_index
        };

        let unit_direction = r_in.dir.normalized();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = refraction_ratio * sin_theta > 1.0;
        let direction = if cannot_refract
            || random_f64(rng) < Self::reflectance(cos_theta, self.refractive_index)
        {
            Vec3::reflect(&unit_direction, &rec.normal)
        } else {
            Vec3::refract(&unit_direction, &rec.normal, refraction_ratio)
        };

        Some((Color::one(), Ray::new(rec.p, direction)))
    }
}
