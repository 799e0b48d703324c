//! Web app manifest `icons` fragment
//!
//! Mirrors the `icons` member of the W3C Web App Manifest so the generated
//! PNGs for one design can be pasted straight into a `manifest.json`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Root of the fragment: `{ "icons": [...] }`
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconsFragment {
    /// One entry per generated size
    pub icons: Vec<ManifestIcon>,
}

/// A single image resource in the manifest
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ManifestIcon {
    /// URL of the image, relative to the manifest
    pub src: String,

    /// Space separated `WxH` sizes contained in the image (e.g. "192x192")
    pub sizes: String,

    /// MIME type of the image
    #[serde(rename = "type")]
    pub mime_type: String,

    /// Contexts the icon may be used in (e.g. "any", "maskable")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl ManifestIcon {
    /// Creates an entry for a square PNG
    ///
    /// # Arguments
    /// * `src` - File name of the PNG
    /// * `size` - Edge length in pixels
    pub fn png(src: String, size: u32) -> Self {
        Self {
            src,
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
            purpose: Some("any".to_string()),
        }
    }
}

impl IconsFragment {
    pub fn add_icon(&mut self, icon: ManifestIcon) {
        self.icons.push(icon);
    }

    /// Serializes the fragment as pretty JSON to `path`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize manifest fragment")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Path of the fragment for one design, e.g. `manifest-option3.json`
pub fn fragment_path(out_dir: &Path, option_id: &str) -> PathBuf {
    out_dir.join(format!("manifest-{option_id}.json"))
}
