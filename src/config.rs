use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

/// Render settings as they appear in the TOML file. Optional fields get
/// their defaults on conversion into [`Config`].
#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub resolution: Resolution,
    pub samples_per_pixel: u16,
    pub max_depth: u16,
    pub seed: Option<u64>,
    pub jitter: Option<bool>,
    pub output_path: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub resolution: Resolution,
    pub samples_per_pixel: u16,
    pub max_depth: u16,
    pub seed: u64,
    pub jitter: bool,
    pub output_path: String,
}

impl Config {
    pub fn aspect_ratio(&self) -> f64 {
        self.resolution.width as f64 / self.resolution.height as f64
    }
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        let output_path = data.output_path.unwrap_or_else(|| {
            format!(
                "render_{}x{}_{}spp_{}depth.png",
                data.resolution.width, data.resolution.height, data.samples_per_pixel,
                data.max_depth
            )
        });
        Config {
            resolution: data.resolution,
            samples_per_pixel: data.samples_per_pixel,
            max_depth: data.max_depth,
            seed: data.seed.unwrap_or(0),
            jitter: data.jitter.unwrap_or(true),
            output_path,
        }
    }
}

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<TOMLConfig> {
    let filepath = filepath.as_ref();
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("could not read config file {}", filepath.display()))?;
    let settings: TOMLConfig = toml::from_str(&input)
        .with_context(|| format!("could not parse config file {}", filepath.display()))?;
    Ok(settings)
}
