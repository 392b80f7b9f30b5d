//! Per-pixel integrator: sampling, bounce resolution and averaging.

use crate::common::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

/// Image-level knobs handed to [`render`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    /// Base seed; each scanline derives its own stream from it.
    pub seed: u64,
}

impl RenderSettings {
    /// Derives the image height from `aspect_ratio`, never less than one row.
    pub fn from_aspect(
        image_width: u32,
        aspect_ratio: f64,
        samples_per_pixel: u32,
        max_depth: u32,
        seed: u64,
    ) -> Result<Self> {
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(RenderError::InvalidSettings(format!(
                "aspect ratio must be positive, got {aspect_ratio}"
            )));
        }
        let image_height = (image_width as f64 / aspect_ratio).round().max(1.0) as u32;
        Ok(Self {
            image_width,
            image_height,
            samples_per_pixel,
            max_depth,
            seed,
        })
    }

    /// Width over height of the pixel grid actually rendered.
    pub fn aspect_ratio(&self) -> f64 {
        self.image_width as f64 / self.image_height as f64
    }

    pub fn validate(&self) -> Result<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::InvalidSettings(format!(
                "image must be at least 1x1, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSettings(
                "samples per pixel must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rendered pixels, row-major from the top scanline down.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Image {
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }
}

/// Background seen by rays that leave the scene: a vertical blend from
/// white (down) to sky blue (up).
pub fn sky_color(r: &Ray) -> Color {
    let unit_direction = r.dir.normalized();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}

/// Radiance carried back along `r`, following at most `depth` scene queries.
///
/// Each scattering hit multiplies its attenuation into the running
/// throughput and continues with the scattered ray. Absorption and an
/// exhausted bounce budget both end in black; a miss ends in the sky color.
/// Runs as a loop, so large budgets cannot exhaust the stack.
pub fn ray_color(r: &Ray, world: &Scene, depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut ray = *r;
    let mut throughput = Color::one();

    for _ in 0..depth {
        let Some(rec) = world.hit(&ray, Interval::starting_at(T_MIN)) else {
            return throughput * sky_color(&ray);
        };
        match world.material(rec.material).scatter(&ray, &rec, rng) {
            Some((attenuation, scattered)) => {
                throughput = throughput * attenuation;
                ray = scattered;
            }
            None => return Color::zero(),
        }
    }

    Color::zero()
}

/// Viewport coordinate of a point `offset` into pixel `index` along an axis
/// of `extent` pixels. Stays in [0, 1] for `offset` in [0, 1].
#[inline]
fn viewport_coord(index: u32, offset: f64, extent: u32) -> f64 {
    (index as f64 + offset) / extent as f64
}

/// Viewport `(s, t)` of one sample inside pixel `(i, j)`. A single sample
/// goes through the pixel centre; more samples are spread over its footprint.
fn pixel_sample(i: u32, j: u32, settings: &RenderSettings, rng: &mut dyn RngCore) -> (f64, f64) {
    let (du, dv) = if settings.samples_per_pixel == 1 {
        (0.5, 0.5)
    } else {
        (random_f64(rng), random_f64(rng))
    };
    (
        viewport_coord(i, du, settings.image_width),
        viewport_coord(j, dv, settings.image_height),
    )
}

/// Averaged, gamma-corrected color of pixel `(i, j)`, with `j` counted from
/// the bottom row. Channels are clamped to [0, 0.999].
pub fn render_pixel(
    camera: &Camera,
    world: &Scene,
    i: u32,
    j: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::zero();
    for _ in 0..settings.samples_per_pixel {
        let (s, t) = pixel_sample(i, j, settings, rng);
        let r = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&r, world, settings.max_depth, rng);
    }
    pixel_color /= settings.samples_per_pixel as f64;

    let intensity = Interval::new(0.0, 0.999);
    Color::new(
        intensity.clamp(linear_to_gamma(pixel_color.x)),
        intensity.clamp(linear_to_gamma(pixel_color.y)),
        intensity.clamp(linear_to_gamma(pixel_color.z)),
    )
}

#[inline]
fn scanline_seed(seed: u64, row: u32) -> u64 {
    seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Renders the whole frame. Scanlines run in parallel on the current rayon
/// pool, each with its own seeded stream, so a given seed always produces
/// the same image.
pub fn render(camera: &Camera, world: &Scene, settings: &RenderSettings) -> Result<Image> {
    settings.validate()?;

    let width = settings.image_width;
    let height = settings.image_height;
    log::info!(
        "Rendering {}x{} image, {} samples/pixel, max depth {}, {} primitives",
        width,
        height,
        settings.samples_per_pixel,
        settings.max_depth,
        world.len()
    );

    let start = Instant::now();
    let finished = AtomicU32::new(0);

    let rows: Vec<Vec<Color>> = (0..height)
        .into_par_iter()
        .map(|row| {
            let mut rng = StdRng::seed_from_u64(scanline_seed(settings.seed, row));
            let j = height - 1 - row;
            let line: Vec<Color> = (0..width)
                .map(|i| render_pixel(camera, world, i, j, settings, &mut rng))
                .collect();

            let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
            // Update less frequently
            if done % 20 == 0 || done == height {
                log::info!("Scanlines remaining: {}", height - done);
            }
            line
        })
        .collect();

    log::info!("Done in {:.2?}", start.elapsed());

    Ok(Image {
        width,
        height,
        pixels: rows.into_iter().flatten().collect(),
    })
}
