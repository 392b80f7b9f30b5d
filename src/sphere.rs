use crate::common::*;

/// Sphere primitive. A negative radius is allowed and turns the geometric
/// outward normal inside out, which models a thin hollow shell when nested
/// inside a positive sphere of the same dielectric.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: MaterialId,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = r.orig - self.center;
        let a = r.dir.length_squared();
        let half_b = oc.dot(r.dir);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Nearest root in range first.
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (r.at(root) - self.center) / self.radius;
        Some(HitRecord::new(r, root, outward_normal, self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn full_range() -> Interval {
        Interval::starting_at(T_MIN)
    }

    #[test]
    fn test_head_on_hit_reports_distance_to_surface() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, MaterialId::new(0));
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&r, full_range()).unwrap();
        assert!((rec.t - 4.0).abs() < EPS);
        assert!(rec.front_face);
        assert!((rec.normal - Vec3::new(0.0, 0.0, 1.0)).length() < EPS);
        assert!((rec.p - Point3::new(0.0, 0.0, -4.0)).length() < EPS);
    }

    #[test]
    fn test_unnormalized_direction_scales_t() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, MaterialId::new(0));
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -2.0));
        let rec = sphere.hit(&r, full_range()).unwrap();
        assert!((rec.t - 2.0).abs() < EPS);
    }

    #[test]
    fn test_hit_from_inside_uses_far_root_and_back_face() {
        let sphere = Sphere::new(Point3::zero(), 2.0, MaterialId::new(0));
        let r = Ray::new(Point3::zero(), Vec3::new(1.0, 0.0, 0.0));

        let rec = sphere.hit(&r, full_range()).unwrap();
        assert!((rec.t - 2.0).abs() < EPS);
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::new(-1.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_miss() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, MaterialId::new(0));
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&r, full_range()).is_none());
    }

    #[test]
    fn test_sphere_behind_ray_is_ignored() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 5.0), 1.0, MaterialId::new(0));
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&r, full_range()).is_none());
    }

    #[test]
    fn test_interval_rejects_both_roots() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, MaterialId::new(0));
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&r, Interval::new(T_MIN, 3.9)).is_none());
        // only the far root remains
        let rec = sphere.hit(&r, Interval::starting_at(4.5)).unwrap();
        assert!((rec.t - 6.0).abs() < EPS);
        assert!(!rec.front_face);
    }

    #[test]
    fn test_negative_radius_inverts_outward_normal() {
        let hollow = Sphere::new(Point3::new(0.0, 0.0, -5.0), -1.0, MaterialId::new(0));
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));

        let rec = hollow.hit(&r, full_range()).unwrap();
        assert!((rec.t - 4.0).abs() < EPS);
        // geometric outward normal points into the shell, so the ray is "inside"
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::new(0.0, 0.0, 1.0)).length() < EPS);
        assert!(rec.normal.dot(r.dir) < 0.0);
    }
}
