//! Reading box documents and union settings from disk.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use skyline_merge::UnionConfig;
use skyline_types::{Skyline, SkylineBox};

/// A JSON document listing boxes and/or skylines to union.
///
/// ```json
/// {
///   "boxes": [{ "left": 2, "right": 7, "height": 2 }],
///   "skylines": [[[4, 0], [4, 3], [9, 3], [9, 0]]]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputDocument {
    pub boxes: Vec<SkylineBox<f64>>,
    pub skylines: Vec<Skyline<f64>>,
}

impl InputDocument {
    /// Boxes first, then skylines, in document order.
    pub fn into_skylines(self) -> anyhow::Result<Vec<Skyline<f64>>> {
        let mut skylines = Vec::with_capacity(self.boxes.len() + self.skylines.len());
        for (i, b) in self.boxes.iter().enumerate() {
            skylines.push(b.to_skyline().with_context(|| format!("box {i}"))?);
        }
        skylines.extend(self.skylines);
        Ok(skylines)
    }
}

pub fn read_document(path: &Path) -> anyhow::Result<InputDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Read a single skyline stored as a JSON point array.
pub fn read_skyline(path: &Path) -> anyhow::Result<Skyline<f64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load union settings, falling back to defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<UnionConfig> {
    let Some(path) = path else {
        return Ok(UnionConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}
