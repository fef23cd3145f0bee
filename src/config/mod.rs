use serde::Deserialize;
use std::path::PathBuf;

use crate::corrections::{
    AntimeridianCorrection, CorrectionChain, EarCorrection, EarPatch, antimeridian,
};

fn default_output() -> PathBuf {
    PathBuf::from("prefix")
}
fn default_antimeridian_threshold() -> f64 {
    antimeridian::DEFAULT_THRESHOLD
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    /// Degrees; hulls reaching beyond ±threshold on both sides get the
    /// antimeridian correction
    #[serde(default = "default_antimeridian_threshold")]
    pub antimeridian_threshold: f64,
    /// Replaces the built-in ear table when given
    #[serde(default)]
    pub ears: Option<Vec<EarPatch>>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            verbose: default_verbose(),
            antimeridian_threshold: default_antimeridian_threshold(),
            ears: None,
        }
    }
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Correction chain described by this config
    pub fn corrections(&self) -> CorrectionChain {
        let ears = match &self.ears {
            Some(patches) => EarCorrection::new(patches.clone()),
            None => EarCorrection::default(),
        };
        CorrectionChain::empty()
            .with(AntimeridianCorrection::new(self.antimeridian_threshold))
            .with(ears)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("prefixmap.toml"));
    paths.push(PathBuf::from(".prefixmap.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("prefixmap").join("config.toml"));
        paths.push(config_dir.join("prefixmap.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".prefixmap.toml"));
    }

    paths
}
