use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use raycaster::{
    demos::{clock, patterns, projectiles, silhouette, spheres},
    render::{
        camera::Camera,
        canvas::{Canvas, ImageFormat},
    },
    scene::world::World,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Demo {
    Clock,
    Projectiles,
    Silhouette,
    Spheres,
    Patterns,
}

impl Demo {
    fn name(&self) -> &'static str {
        match self {
            Demo::Clock => "clock",
            Demo::Projectiles => "projectiles",
            Demo::Silhouette => "silhouette",
            Demo::Spheres => "spheres",
            Demo::Patterns => "patterns",
        }
    }
}

/// Simple ray caster
/// Renders one of the built-in demo scenes into an image file
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The demo to render
    demo: Demo,

    /// The format of the output image
    #[clap(short = 'f', long, default_value = "ppm")]
    image_format: ImageFormat,

    /// The output path of the rendered image.
    /// By default it's `./<demo>.<image_format>`
    #[clap(short, long)]
    output_path: Option<PathBuf>,

    /// Width (in pixels) of the output image.
    /// Only used by the camera demos (spheres, patterns)
    #[clap(long)]
    width: Option<usize>,

    /// Height (in pixels) of the output image.
    /// Only used by the camera demos (spheres, patterns)
    #[clap(long)]
    height: Option<usize>,

    /// Field of view of the camera in radians.
    /// Only used by the camera demos (spheres, patterns)
    #[clap(long)]
    fov: Option<f64>,

    /// Shade pixels on all cores and show a progress bar
    #[clap(long)]
    parallel: bool,
}

fn init_logger() {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn render_parallel(world: &World, camera: &Camera) -> anyhow::Result<Canvas> {
    let mut canvas = camera.canvas();
    let pixel_count = (canvas.width() * canvas.height()) as u64;

    let progressbar = ProgressBar::new(pixel_count).with_style(
        ProgressStyle::with_template(
            "{elapsed_precise} [{wide_bar:.cyan/blue}] {percent}% ({eta} left)",
        )
        .context("invalid progress bar template")?,
    );
    canvas.set_each_pixel(|x, y| camera.color_at_pixel(world, x, y), progressbar);
    Ok(canvas)
}

fn render_camera_demo(world: World, camera: Camera, parallel: bool) -> anyhow::Result<Canvas> {
    info!(
        "rendering {}x{} image",
        camera.target_width(),
        camera.target_height()
    );
    if parallel {
        render_parallel(&world, &camera)
    } else {
        Ok(camera.render(&world))
    }
}

fn run(args: &Args) -> anyhow::Result<Canvas> {
    let canvas = match args.demo {
        Demo::Clock => clock::run(),
        Demo::Projectiles => projectiles::run(),
        Demo::Silhouette => silhouette::run(),
        Demo::Spheres => render_camera_demo(
            spheres::world().context("failed to build spheres scene")?,
            spheres::camera(args.width, args.height, args.fov)
                .context("failed to set up camera")?,
            args.parallel,
        )?,
        Demo::Patterns => render_camera_demo(
            patterns::world().context("failed to build patterns scene")?,
            patterns::camera(args.width, args.height, args.fov)
                .context("failed to set up camera")?,
            args.parallel,
        )?,
    };
    Ok(canvas)
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let args = Args::parse();

    let canvas = run(&args)?;

    let output_path = args.output_path.clone().unwrap_or_else(|| {
        let mut path = PathBuf::from(args.demo.name());
        path.set_extension(args.image_format.to_string());
        path
    });
    canvas
        .save_to_file(&output_path, args.image_format)
        .with_context(|| format!("failed to save image to {}", output_path.display()))?;

    info!("image saved to {}", output_path.display());
    Ok(())
}
