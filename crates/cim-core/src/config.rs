use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/cim/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Site root used to resolve relative hrefs (no trailing slash).
    pub base_url: String,
    /// Root listing page where category links are discovered.
    pub listing_url: String,
    /// CSS class carried by the navigational anchors on listing pages.
    /// Coupled to the source site's current markup; if the site changes
    /// its templates this is the knob to adjust.
    pub link_marker_class: String,
    /// Directory the category/year tree is mirrored into.
    pub output_root: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.usmint.gov".to_string(),
            listing_url: "https://www.usmint.gov/news/image-library/circulating".to_string(),
            link_marker_class: "LinkText".to_string(),
            output_root: PathBuf::from("coin_images"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cim")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScrapeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScrapeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ScrapeConfig = toml::from_str(&data)?;
    Ok(cfg)
}
