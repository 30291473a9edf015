//! File-backed articulation overrides.
//!
//! Catalog entries are compiled in; a per-robot JSON file can replace one for
//! lab-specific tuning without rebuilding.

use anyhow::{Context, Result};
use std::path::Path;

use crate::articulation::ArticulationConfig;

/// Load an articulation configuration from a JSON file.
pub fn load_articulation(path: &Path) -> Result<ArticulationConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read articulation config {}", path.display()))?;

    let config: ArticulationConfig = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse articulation config {}", path.display()))?;

    Ok(config)
}

/// Load an articulation configuration, falling back to `fallback` (typically
/// a catalog entry) when the file does not exist.
pub fn load_articulation_or(path: &Path, fallback: ArticulationConfig) -> Result<ArticulationConfig> {
    if !path.exists() {
        tracing::warn!(
            "Articulation config not found at {}, using catalog defaults",
            path.display()
        );
        return Ok(fallback);
    }
    load_articulation(path)
}

/// Write an articulation configuration as pretty-printed JSON.
pub fn save_articulation(path: &Path, config: &ArticulationConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)
        .context("Failed to serialize articulation config")?;

    std::fs::write(path, json)
        .with_context(|| format!("Failed to write articulation config {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::unitree_go2;

    #[test]
    fn save_then_load_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "robot_lab_cfg_{}_{}.json",
            std::process::id(),
            line!()
        ));

        let original = unitree_go2();
        save_articulation(&path, &original).unwrap();
        let loaded = load_articulation(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.spawn.usd_path, original.spawn.usd_path);
        assert_eq!(loaded.init_state.pos, original.init_state.pos);
        assert_eq!(loaded.actuators.len(), original.actuators.len());
    }

    #[test]
    fn missing_file_falls_back() {
        let path = Path::new("/nonexistent/robot_lab/override.json");
        let loaded = load_articulation_or(path, unitree_go2()).unwrap();
        assert_eq!(loaded.spawn.usd_path, "Robots/Unitree/Go2/go2.usd");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "robot_lab_bad_{}_{}.json",
            std::process::id(),
            line!()
        ));
        std::fs::write(&path, "{ not json").unwrap();
        let result = load_articulation(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
