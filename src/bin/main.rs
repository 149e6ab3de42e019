use whitted::camera::Camera;
use whitted::config::{get_settings, Config};
use whitted::png;
use whitted::renderer::{film_to_rgb8, NaiveRenderer};
use whitted::world::{cornell_room, default_lights, RoomLayout};

use std::time::Instant;

use structopt::StructOpt;
use tracing::{info, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    /// Overrides the seed from the config file.
    #[structopt(long)]
    pub seed: Option<u64>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => default,
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, Level::INFO))
        .init();

    let mut config: Config = get_settings(&opts.config_file)?.into();
    if let Some(seed) = opts.seed {
        config.seed = seed;
    }
    info!(
        "loaded {}: {}x{}, {} samples per pixel, max depth {}, seed {}",
        opts.config_file,
        config.resolution.width,
        config.resolution.height,
        config.samples_per_pixel,
        config.max_depth,
        config.seed
    );

    let camera = Camera::new(config.aspect_ratio(), 2.0, 1.0);
    let layout = RoomLayout::default();
    let world = cornell_room(&layout, default_lights(&layout));

    if opts.dry_run {
        info!(
            "dry run: would render {} objects under {} lights",
            world.objects.len(),
            world.lights.len()
        );
        return Ok(());
    }

    let start = Instant::now();
    let film = NaiveRenderer::new().render(&world, &camera, &config);
    info!("rendered in {:.2?}", start.elapsed());

    let rgb = film_to_rgb8(&film);
    png::write_rgb(
        &config.output_path,
        config.resolution.width,
        config.resolution.height,
        &rgb,
    )?;
    info!("wrote {}", config.output_path);
    Ok(())
}
