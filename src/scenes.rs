//! Ready-made worlds for the command-line renderer.

use crate::common::*;
use rand::RngCore;

/// Ground, three large feature orbs and a field of small randomly
/// materialized spheres.
pub fn random_scene(rng: &mut dyn RngCore) -> Result<Scene> {
    let mut world = Scene::new();

    // Dark, slightly fuzzy mirror floor
    let ground = world.add_material(Metal::new(Color::new(0.1, 0.1, 0.15), 0.05));
    world.add(Sphere::new(Point3::new(0.0, -1000.0, -1.0), 1000.0, ground))?;

    let large_glass = world.add_material(Dielectric::new(1.5)?);
    let gold = world.add_material(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));
    let blue_metal = world.add_material(Metal::new(Color::new(0.01, 0.0, 0.6), 0.0));

    let feature_centers = [
        (Point3::new(0.0, 1.0, 0.0), large_glass),
        (Point3::new(-4.0, 1.0, 0.0), gold),
        (Point3::new(4.0, 1.0, 0.0), blue_metal),
    ];
    for (center, material) in feature_centers {
        world.add(Sphere::new(center, 1.0, material))?;
    }

    let bubble_glass = world.add_material(Dielectric::new(1.3)?);
    let bright_diffuse = world.add_material(Lambertian::new(Color::new(0.9, 0.9, 0.7)));

    let small_radius = 0.2;
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * random_f64(rng),
                small_radius,
                b as f64 + 0.9 * random_f64(rng),
            );

            // Keep clear of the feature orbs
            let overlaps = feature_centers
                .iter()
                .any(|(c, _)| (center - *c).length() <= 1.0 + small_radius);
            if overlaps {
                continue;
            }

            let material = if choose_mat < 0.3 {
                let albedo = Color::random(rng) * Color::random(rng);
                world.add_material(Lambertian::new(albedo))
            } else if choose_mat < 0.6 {
                let albedo = Color::random_interval(rng, 0.5, 1.0);
                let fuzz = random_f64_range(rng, 0.0, 0.5);
                world.add_material(Metal::new(albedo, fuzz))
            } else if choose_mat < 0.8 {
                bubble_glass
            } else {
                bright_diffuse
            };
            world.add(Sphere::new(center, small_radius, material))?;
        }
    }

    log::debug!(
        "random scene: {} spheres, {} materials",
        world.len(),
        world.material_count()
    );
    Ok(world)
}

/// Low, slightly off-axis view of [`random_scene`] focused on the glass orb.
pub fn random_scene_camera(aspect_ratio: f64) -> CameraConfig {
    let look_from = Point3::new(13.0, 2.0, 3.0);
    CameraConfig {
        look_from,
        look_at: Point3::zero(),
        vup: Vec3::new(0.0, 1.0, 0.0),
        vfov: 20.0,
        aspect_ratio,
        aperture: 0.1,
        focus_dist: 10.0,
    }
}

/// Diffuse centre sphere between a hollow glass bubble and a fuzzy metal.
pub fn demo_scene() -> Result<Scene> {
    let mut world = Scene::new();

    let ground = world.add_material(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center = world.add_material(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let glass = world.add_material(Dielectric::new(1.5)?);
    let metal = world.add_material(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));

    world.add(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, ground))?;
    world.add(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, center))?;
    // Negative inner radius turns the glass sphere into a thin shell
    world.add(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, glass))?;
    world.add(Sphere::new(Point3::new(-1.0, 0.0, -1.0), -0.45, glass))?;
    world.add(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, metal))?;

    Ok(world)
}

pub fn demo_scene_camera(aspect_ratio: f64) -> CameraConfig {
    let look_from = Point3::new(3.0, 3.0, 2.0);
    let look_at = Point3::new(0.0, 0.0, -1.0);
    CameraConfig {
        look_from,
        look_at,
        vup: Vec3::new(0.0, 1.0, 0.0),
        vfov: 20.0,
        aspect_ratio,
        aperture: 2.0,
        focus_dist: (look_from - look_at).length(),
    }
}
