use crate::icon::IconsetError;
use serde::Deserialize;

/// Pixel density of an iconset entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Scale {
    /// One pixel per point
    Standard,

    /// Two pixels per point
    Retina,
}

impl Scale {
    /// The suffix appended to the file stem.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Standard => "",
            Self::Retina => "@2x",
        }
    }
}

/// A single file in the iconset.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IconsetEntry {
    pub file_name: String,
    pub nominal_size: u32,
    pub scale: Scale,
}

impl IconsetEntry {
    pub fn new(nominal_size: u32, scale: Scale) -> Self {
        let file_name = format!(
            "icon_{0}x{0}{1}.svg",
            nominal_size,
            scale.suffix()
        );

        Self {
            file_name,
            nominal_size,
            scale,
        }
    }
}

/// Decides which iconset entries a rendered size is written as.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconsetRules {
    /// Largest size written under its own name
    pub nominal_max_size: u32,

    /// Smallest size written as the @2x asset of half its size
    pub retina_min_size: u32,

    /// Largest size written as the @2x asset of half its size
    pub retina_max_size: u32,
}

impl Default for IconsetRules {
    fn default() -> Self {
        Self {
            nominal_max_size: 512,
            retina_min_size: 32,
            retina_max_size: 1024,
        }
    }
}

impl IconsetRules {
    /// Computes the entries the document rendered at `size` is stored as.
    pub fn entries_for_size(&self, size: u32) -> Result<Vec<IconsetEntry>, IconsetError> {
        if size == 0 {
            return Err(IconsetError::InvalidSize(size));
        }

        let mut entries = Vec::with_capacity(2);

        if size <= self.nominal_max_size {
            entries.push(IconsetEntry::new(size, Scale::Standard));
        }

        if (self.retina_min_size..=self.retina_max_size).contains(&size) {
            if size % 2 != 0 {
                return Err(IconsetError::OddRetinaSize(size));
            }

            entries.push(IconsetEntry::new(size / 2, Scale::Retina));
        }

        Ok(entries)
    }
}
