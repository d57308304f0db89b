/// Bound configuration: defaults, optional TOML file, command line overrides.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use crate::cli::BoundArgs;
use crate::generator::ColorGenerator;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub max_attempts: Option<u32>,
    #[serde(default)]
    pub max: BoundsTable,
    #[serde(default)]
    pub min: BoundsTable,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BoundsTable {
    pub r: Option<u8>,
    pub g: Option<u8>,
    pub b: Option<u8>,
}

/// Returns the default config path inside the user's config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pastel").join("config.toml"))
}

pub fn parse(text: &str) -> Result<FileConfig> {
    Ok(toml::from_str(text)?)
}

/// Loads the explicit config file, which must exist, or else the default one if present.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("no config file, using built-in bounds");
                return Ok(FileConfig::default());
            }
        },
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    debug!("loaded config from {}", path.display());
    parse(&text).with_context(|| format!("invalid config file {}", path.display()))
}

/// Command line values win over the file; anything left unset takes the built-in default.
pub fn resolve(file: &FileConfig, args: &BoundArgs) -> ColorGenerator {
    let generator = ColorGenerator::new(
        args.max_r.or(file.max.r),
        args.max_g.or(file.max.g),
        args.max_b.or(file.max.b),
        args.min_r.or(file.min.r),
        args.min_g.or(file.min.g),
        args.min_b.or(file.min.b),
    );
    let generator = match args.max_attempts.or(file.max_attempts) {
        Some(attempts) => generator.with_max_attempts(attempts),
        None => generator,
    };
    debug!(
        "bounds max {:?} min {:?}, up to {} attempts",
        generator.max_limit(),
        generator.min_limit(),
        generator.max_attempts()
    );
    generator
}
