use crate::common::*;

/// Surface interaction found by [`Hittable::hit`].
///
/// Built once per intersection and read-only afterwards. `normal` always
/// opposes the incoming ray; `front_face` records which side was struck.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    pub p: Point3,
    pub normal: Vec3,
    pub t: f64,
    pub material: MaterialId,
    pub front_face: bool,
}

impl HitRecord {
    /// `outward_normal` must be unit length and point away from the
    /// surface's geometric outside.
    #[inline]
    pub fn new(r: &Ray, t: f64, outward_normal: Vec3, material: MaterialId) -> Self {
        let front_face = r.dir.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            p: r.at(t),
            normal,
            t,
            material,
            front_face,
        }
    }
}

pub trait Hittable: Send + Sync {
    /// Nearest intersection with `t` strictly inside `ray_t`, if any.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
