use std::path::Path;

use anyhow::{Context, Result};
use lumen_core::{load_scene, Scene};
use lumen_renderer::{ImageBuffer, Renderer};

mod settings;

use settings::Settings;

/// Save `image`, retrying once if the first write fails.
fn save_with_retry(image: &ImageBuffer, path: &Path) -> Result<()> {
    if let Err(err) = image.save(path) {
        log::warn!("Saving {} failed ({}), retrying once", path.display(), err);
        image
            .save(path)
            .with_context(|| format!("Failed to save image to {}", path.display()))?;
    }
    Ok(())
}

fn load(settings: &Settings) -> Result<Scene> {
    match &settings.scene_path {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        None => {
            log::info!("No scene file given, using the demo scene");
            Ok(Scene::demo())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Lumen");

    let settings = Settings::from_env();
    let scene = load(&settings)?;

    let renderer = Renderer::new(scene, settings.render.clone()).context("Invalid scene")?;
    let image = renderer.render().context("Render failed")?;

    save_with_retry(&image, &settings.output.path())?;

    Ok(())
}
