use crate::icon::targets::IconsetRules;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconsetMetadata {
    /// The iconset directory, relative to the workspace root
    pub output_dir: PathBuf,

    /// The canvas sizes to render, in order
    pub sizes: Vec<u32>,

    /// The rules mapping a canvas size to file names
    pub rules: IconsetRules,
}

impl Default for IconsetMetadata {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("Resources").join("AppIcon.iconset"),
            sizes: DEFAULT_SIZES.to_vec(),
            rules: IconsetRules::default(),
        }
    }
}
