use crate::icon::IconsetError;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct OutputGenerator {
    output_dir: PathBuf,
    outputs: BTreeMap<String, PathBuf>,
}

impl OutputGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            outputs: BTreeMap::new(),
        }
    }

    /// Creates the output directory including all missing parents
    pub fn create_output_dir(&self) -> Result<&Path, std::io::Error> {
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(&self.output_dir)
    }

    /// Writes a file into the output directory, replacing any previous file with the same name
    pub fn write_output(&mut self, name: &str, contents: &str) -> Result<&Path, IconsetError> {
        if let Some(path) = self.outputs.get(name) {
            return Err(IconsetError::DuplicatedOutput {
                name: name.to_owned(),
                path: path.clone(),
            });
        }

        let output_path = self.output_dir.join(name);

        let mut writer = File::create(&output_path)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;

        tracing::debug!("Wrote {}", output_path.display());

        let path = self.outputs.entry(name.to_owned()).or_insert(output_path);
        Ok(path.as_path())
    }

    pub fn finalize(self) -> BuildOutputs {
        BuildOutputs {
            output_dir: self.output_dir,
            outputs: self.outputs,
        }
    }
}

/// The files written during a single run
#[derive(Debug)]
pub struct BuildOutputs {
    output_dir: PathBuf,
    outputs: BTreeMap<String, PathBuf>,
}

impl BuildOutputs {
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Looks up the path of a written output by file name
    pub fn get_output(&self, name: &str) -> Result<&Path, IconsetError> {
        self.outputs
            .get(name)
            .map(PathBuf::as_path)
            .ok_or_else(|| IconsetError::OutputNotFound(name.to_owned()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.outputs
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}
