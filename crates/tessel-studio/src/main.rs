use std::path::PathBuf;

use anyhow::Result;
use tessel_engine::logging::{LoggingConfig, init_logging};
use tessel_engine::mesh::CubeAssets;
use tessel_engine::window::{Runtime, RuntimeConfig};

mod controls;
mod scene;

use scene::Scene;

/// Overrides the bundled asset directory.
const ASSETS_ENV: &str = "TESSEL_ASSETS";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let dir = assets_dir();
    log::info!("loading assets from {}", dir.display());
    let assets = CubeAssets::in_dir(dir);

    let config = RuntimeConfig {
        title: "tessel studio".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, |gl| Scene::new(gl.clone(), &assets))
}

fn assets_dir() -> PathBuf {
    match std::env::var_os(ASSETS_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets")),
    }
}
