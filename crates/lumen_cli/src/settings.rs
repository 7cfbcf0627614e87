//! Run settings read from the environment.

use std::path::{Path, PathBuf};

use lumen_renderer::{OutputConfig, RenderConfig};

/// Path to a JSON scene file. The built-in demo scene is used when unset.
pub const SCENE_VAR: &str = "LUMEN_SCENE";
/// Output file name without extension.
pub const OUTPUT_NAME_VAR: &str = "LUMEN_OUTPUT_NAME";
/// Directory the output file is written to.
pub const OUTPUT_DIR_VAR: &str = "LUMEN_OUTPUT_DIR";
/// Any value forces the sequential render loop.
pub const SEQUENTIAL_VAR: &str = "LUMEN_SEQUENTIAL";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub scene_path: Option<PathBuf>,
    pub output: OutputConfig,
    pub render: RenderConfig,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as unset. Without an explicit output name, a scene
    /// file's stem names the output.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let scene_path = get(SCENE_VAR).map(PathBuf::from);

        let mut output = OutputConfig::default();
        let name = get(OUTPUT_NAME_VAR).or_else(|| scene_path.as_deref().and_then(file_stem));
        if let Some(name) = name {
            output.name = name;
        }
        if let Some(dir) = get(OUTPUT_DIR_VAR) {
            output.directory = PathBuf::from(dir);
        }

        let render = RenderConfig {
            parallel: get(SEQUENTIAL_VAR).is_none(),
            ..Default::default()
        };

        Self {
            scene_path,
            output,
            render,
        }
    }
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[]);
        assert_eq!(s.scene_path, None);
        assert_eq!(s.output, OutputConfig::default());
        assert!(s.render.parallel);
    }

    #[test]
    fn test_scene_names_output() {
        let s = settings(&[(SCENE_VAR, "scenes/three_spheres.json")]);
        assert_eq!(s.scene_path, Some(PathBuf::from("scenes/three_spheres.json")));
        assert_eq!(s.output.name, "three_spheres");
    }

    #[test]
    fn test_explicit_output() {
        let s = settings(&[
            (SCENE_VAR, "scene.json"),
            (OUTPUT_NAME_VAR, "final"),
            (OUTPUT_DIR_VAR, "renders"),
            (SEQUENTIAL_VAR, "1"),
        ]);
        assert_eq!(s.output.path(), PathBuf::from("renders/final.ppm"));
        assert!(!s.render.parallel);
    }

    #[test]
    fn test_empty_values_ignored() {
        let s = settings(&[(SCENE_VAR, ""), (OUTPUT_NAME_VAR, ""), (SEQUENTIAL_VAR, "")]);
        assert_eq!(s.scene_path, None);
        assert_eq!(s.output.name, "def");
        assert!(s.render.parallel);
    }
}
