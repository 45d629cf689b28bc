pub mod gen;
pub mod geometry;
pub mod meta;
pub mod render;
pub mod targets;

use crate::icon::gen::{BuildOutputs, OutputGenerator};
use crate::icon::geometry::TrianglePoints;
use crate::icon::meta::IconsetMetadata;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Location of the iconset metadata, relative to the workspace root.
pub const METADATA_FILE: &str = "assets/icon/iconset-meta.json";

pub struct IconsetProcessor {
    metadata: IconsetMetadata,
    output_dir: PathBuf,
}

impl IconsetProcessor {
    pub fn new(root: impl AsRef<Path>, metadata: IconsetMetadata) -> Self {
        let output_dir = root.as_ref().join(&metadata.output_dir);
        Self {
            metadata,
            output_dir,
        }
    }

    /// Constructs a processor for the given workspace root, reading the metadata file if the
    /// root has one and falling back to the built-in defaults otherwise.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self, IconsetError> {
        let root = root.as_ref();
        let metadata_path = root.join(METADATA_FILE);

        let metadata = if metadata_path.is_file() {
            tracing::debug!("Loading iconset metadata from {}", metadata_path.display());

            let metadata = std::fs::read_to_string(&metadata_path)?;
            serde_json::from_str::<IconsetMetadata>(&metadata)
                .map_err(IconsetError::MetadataParse)?
        } else {
            tracing::debug!("No iconset metadata found, using defaults");
            IconsetMetadata::default()
        };

        Ok(Self::new(root, metadata))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Renders every configured size and writes the resulting iconset.
    ///
    /// Stops at the first failure, files written before it are left in place.
    pub fn process(&self) -> Result<BuildOutputs, IconsetError> {
        let mut output_generator = OutputGenerator::new(&self.output_dir);
        output_generator.create_output_dir()?;

        for &size in &self.metadata.sizes {
            let entries = self.metadata.rules.entries_for_size(size)?;
            if entries.is_empty() {
                tracing::debug!("Size {} maps to no iconset entry, skipping", size);
                continue;
            }

            let points = TrianglePoints::for_size(size);
            let document = render::render_svg_document(size, &points);

            for entry in &entries {
                tracing::debug!(
                    "Rendering size {} as {:?} asset for {}x{}",
                    size,
                    entry.scale,
                    entry.nominal_size,
                    entry.nominal_size
                );
                output_generator.write_output(&entry.file_name, &document)?;
            }
        }

        let outputs = output_generator.finalize();
        tracing::info!(
            "Generated {} icons in {}",
            outputs.len(),
            outputs.output_dir().display()
        );

        Ok(outputs)
    }
}

#[derive(Error, Debug)]
pub enum IconsetError {
    #[error("an I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("an error occurred while parsing the iconset metadata: {0}")]
    MetadataParse(serde_json::Error),

    #[error("the icon size {0} is invalid")]
    InvalidSize(u32),

    #[error("the icon size {0} cannot be halved into an @2x asset")]
    OddRetinaSize(u32),

    #[error("the output {name} has already been generated at {}", path.display())]
    DuplicatedOutput { name: String, path: PathBuf },

    #[error("the output {0} was not found in the generated outputs")]
    OutputNotFound(String),
}
