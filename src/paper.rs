//! Paper size registry
//!
//! Maps page size ids (such as `A4` or `US-Letter`) to page dimensions in
//! points. The registry consults papers through the [`PaperSource`] trait;
//! [`PaperCatalog`] is the TOML-backed implementation shipped with the crate.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Id of the sentinel page size meaning "explicit dimensions"
pub const OTHER_PAPER_ID: &str = "Other";

/// Errors that can occur when loading or parsing a paper catalog
#[derive(Error, Debug)]
pub enum PaperError {
    #[error("Failed to read paper catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse paper catalog TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Dimensions of one page size
#[derive(Debug, Clone, PartialEq)]
pub struct Paper {
    pub id: String,
    /// Human readable name
    pub name: String,
    /// Width in points
    pub width: f64,
    /// Height in points
    pub height: f64,
}

/// Lookup of page sizes by id
pub trait PaperSource {
    /// All known ids, in catalog order
    fn ids(&self) -> Vec<String>;

    /// True if `id` names a known page size, including the sentinel
    fn is_known(&self, id: &str) -> bool;

    /// True if `id` is the custom-dimensions sentinel
    fn is_other(&self, id: &str) -> bool {
        id.eq_ignore_ascii_case(OTHER_PAPER_ID)
    }

    /// Dimensions for `id`, if known
    fn lookup(&self, id: &str) -> Option<Paper>;
}

/// TOML structure for deserializing paper catalogs
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    paper: Vec<TomlPaper>,
}

#[derive(Deserialize)]
struct TomlPaper {
    id: String,
    name: Option<String>,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
}

/// Default catalog - ISO A and B series, North American sizes and the sentinel
const DEFAULT_CATALOG: &str = r##"
[[paper]]
id = "Other"
name = "Other"

[[paper]]
id = "US-Letter"
name = "US Letter"
width = 612.0
height = 792.0

[[paper]]
id = "US-Legal"
name = "US Legal"
width = 612.0
height = 1008.0

[[paper]]
id = "Executive"
name = "Executive"
width = 522.0
height = 756.0

[[paper]]
id = "A3"
name = "A3"
width = 841.889764
height = 1190.551181

[[paper]]
id = "A4"
name = "A4"
width = 595.275591
height = 841.889764

[[paper]]
id = "A5"
name = "A5"
width = 419.527559
height = 595.275591

[[paper]]
id = "A6"
name = "A6"
width = 297.637795
height = 419.527559

[[paper]]
id = "B5"
name = "B5"
width = 498.897638
height = 708.661417
"##;

/// An ordered set of paper sizes
#[derive(Debug, Clone)]
pub struct PaperCatalog {
    papers: Vec<Paper>,
}

impl PaperCatalog {
    /// Build a catalog from papers in the given order
    pub fn new(papers: Vec<Paper>) -> Self {
        Self { papers }
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaperError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    pub fn from_str(content: &str) -> Result<Self, PaperError> {
        let parsed: TomlCatalog = toml::from_str(content)?;

        Ok(PaperCatalog {
            papers: parsed
                .paper
                .into_iter()
                .map(|p| Paper {
                    name: p.name.unwrap_or_else(|| p.id.clone()),
                    id: p.id,
                    width: p.width,
                    height: p.height,
                })
                .collect(),
        })
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    fn find(&self, id: &str) -> Option<&Paper> {
        self.papers.iter().find(|p| p.id.eq_ignore_ascii_case(id))
    }
}

impl PaperSource for PaperCatalog {
    fn ids(&self) -> Vec<String> {
        self.papers.iter().map(|p| p.id.clone()).collect()
    }

    fn is_known(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    fn lookup(&self, id: &str) -> Option<Paper> {
        self.find(id).cloned()
    }
}

impl Default for PaperCatalog {
    fn default() -> Self {
        Self::from_str(DEFAULT_CATALOG).expect("Default paper catalog should be valid TOML")
    }
}
