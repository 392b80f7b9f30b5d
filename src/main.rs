use anyhow::Context;
use bounce_tracer::scenes;
use bounce_tracer::{Camera, RenderSettings, render, write_ppm};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SceneKind {
    /// Field of random small spheres around three large orbs
    Random,
    /// Four spheres including a hollow glass bubble
    Demo,
}

/// Render a sphere scene to a plain-text PPM image.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Width / height ratio
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect: f64,

    /// Samples per pixel
    #[arg(long, default_value_t = 50)]
    samples: u32,

    /// Maximum number of bounces per ray
    #[arg(long, default_value_t = 50)]
    max_depth: u32,

    /// Seed for scene generation and sampling
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = SceneKind::Random)]
    scene: SceneKind,

    /// Override the scene's vertical field of view (degrees)
    #[arg(long)]
    vfov: Option<f64>,

    /// Override the scene's lens aperture
    #[arg(long)]
    aperture: Option<f64>,

    /// Worker threads, 0 uses one per core
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let start = Instant::now();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    let settings = RenderSettings::from_aspect(
        args.width,
        args.aspect,
        args.samples,
        args.max_depth,
        args.seed,
    )?;
    settings.validate()?;
    // Rounded height: the viewport must match the real pixel grid
    let aspect_ratio = settings.aspect_ratio();

    let (world, mut camera_config) = match args.scene {
        SceneKind::Random => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            (
                scenes::random_scene(&mut rng)?,
                scenes::random_scene_camera(aspect_ratio),
            )
        }
        SceneKind::Demo => (scenes::demo_scene()?, scenes::demo_scene_camera(aspect_ratio)),
    };
    if let Some(vfov) = args.vfov {
        camera_config.vfov = vfov;
    }
    if let Some(aperture) = args.aperture {
        camera_config.aperture = aperture;
    }

    let camera = Camera::new(&camera_config).context("invalid camera")?;

    let image = render(&camera, &world, &settings)?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_ppm(&mut out, &image).context("failed to write image")?;

    log::info!("Render finished in {:.2?}", start.elapsed());
    Ok(())
}
