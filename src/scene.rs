use crate::common::*;

/// Handle to a material stored in a [`Scene`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

impl MaterialId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Renderable world: the material arena plus the primitives referring to it.
///
/// Materials are shared many-to-one by id and live exactly as long as the
/// scene. Everything here is read-only during a render.
#[derive(Default)]
pub struct Scene {
    materials: Vec<Box<dyn Material>>,
    objects: HittableList,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            objects: HittableList::new(),
        }
    }

    pub fn add_material<M: Material + 'static>(&mut self, material: M) -> MaterialId {
        self.materials.push(Box::new(material));
        MaterialId(self.materials.len() - 1)
    }

    /// Adds a sphere. Fails if its material is not in this scene or its
    /// radius is zero or not finite.
    pub fn add(&mut self, sphere: Sphere) -> Result<()> {
        let id = sphere.material().index();
        if id >= self.materials.len() {
            return Err(RenderError::UnknownMaterial(id));
        }
        let radius = sphere.radius();
        if radius == 0.0 || !radius.is_finite() {
            return Err(RenderError::InvalidPrimitive(format!(
                "sphere radius must be finite and non-zero, got {radius}"
            )));
        }
        self.objects.add(Box::new(sphere));
        Ok(())
    }

    /// Only ids handed out by [`Scene::add_material`] are valid here.
    pub fn material(&self, id: MaterialId) -> &dyn Material {
        self.materials[id.0].as_ref()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for Scene {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        self.objects.hit(r, ray_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materials_are_shared_by_id() {
        let mut scene = Scene::new();
        let red = scene.add_material(Lambertian::new(Color::new(0.9, 0.1, 0.1)));
        let glass = scene.add_material(Dielectric::new(1.5).unwrap());
        assert_ne!(red, glass);

        scene.add(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, red)).unwrap();
        scene.add(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, red)).unwrap();
        scene.add(Sphere::new(Point3::new(-1.0, 0.0, -1.0), -0.4, glass)).unwrap();

        assert_eq!(scene.len(), 3);
        assert_eq!(scene.material_count(), 2);
    }

    #[test]
    fn test_unknown_material_is_rejected() {
        let mut scene = Scene::new();
        let err = scene
            .add(Sphere::new(Point3::zero(), 1.0, MaterialId::new(3)))
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownMaterial(3)));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_zero_radius_is_rejected() {
        let mut scene = Scene::new();
        let mat = scene.add_material(Lambertian::new(Color::one()));
        assert!(matches!(
            scene.add(Sphere::new(Point3::zero(), 0.0, mat)),
            Err(RenderError::InvalidPrimitive(_))
        ));
    }

    #[test]
    fn test_hit_reports_struck_material() {
        let mut scene = Scene::new();
        let near = scene.add_material(Lambertian::new(Color::one()));
        let far = scene.add_material(Metal::new(Color::one(), 0.0));
        scene.add(Sphere::new(Point3::new(0.0, 0.0, -10.0), 1.0, far)).unwrap();
        scene.add(Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0, near)).unwrap();

        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let rec = scene.hit(&r, Interval::starting_at(T_MIN)).unwrap();
        assert_eq!(rec.material, near);
        assert!((rec.t - 2.0).abs() < 1e-12);
    }
}
