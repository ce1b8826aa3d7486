//! World configuration. Loaded from safari.ron at startup.

use serde::{Deserialize, Serialize};

/// Persistent world settings. Loaded from `safari.ron` in the current
/// directory; every field has a default so partial files are fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// World seed. `None` falls back to a time-derived value at setup.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Half-extent of the populated square, world units.
    #[serde(default = "default_half_extent")]
    pub half_extent: f32,
    /// Decoration counts per category.
    #[serde(default = "default_tree_count")]
    pub tree_count: usize,
    #[serde(default = "default_rock_count")]
    pub rock_count: usize,
    #[serde(default = "default_shrub_count")]
    pub shrub_count: usize,
    #[serde(default = "default_grass_count")]
    pub grass_count: usize,
    /// Minimum separation between herd anchors.
    #[serde(default = "default_herd_spacing")]
    pub herd_spacing: f32,
    /// Keep-out radius around the vehicle spawn.
    #[serde(default = "default_clearing_radius")]
    pub spawn_clearing_radius: f32,
}

fn default_half_extent() -> f32 {
    60.0
}
fn default_tree_count() -> usize {
    40
}
fn default_rock_count() -> usize {
    30
}
fn default_shrub_count() -> usize {
    60
}
fn default_grass_count() -> usize {
    120
}
fn default_herd_spacing() -> f32 {
    8.0
}
fn default_clearing_radius() -> f32 {
    12.0
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            half_extent: default_half_extent(),
            tree_count: default_tree_count(),
            rock_count: default_rock_count(),
            shrub_count: default_shrub_count(),
            grass_count: default_grass_count(),
            herd_spacing: default_herd_spacing(),
            spawn_clearing_radius: default_clearing_radius(),
        }
    }
}

impl WorldConfig {
    /// Load config from `safari.ron`. If the file is missing or invalid,
    /// returns the default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(config) => return config,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `safari.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("safari.ron")
}
