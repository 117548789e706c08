//! Configuration for the template registry

use std::path::PathBuf;

/// Directory holding the templates installed with the application
pub const DEFAULT_SYSTEM_DATA_DIR: &str = "/usr/share/label-templates/templates";

/// Configuration options for loading the template registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Templates installed system-wide, read first
    pub system_data_dir: Option<PathBuf>,

    /// User templates, read second; registered templates are written here
    pub user_data_dir: Option<PathBuf>,

    /// Margin markup added to the generated full-page templates
    pub full_page_margin: f64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            system_data_dir: Some(PathBuf::from(DEFAULT_SYSTEM_DATA_DIR)),
            user_data_dir: dirs::data_dir().map(|dir| dir.join("label-templates").join("templates")),
            full_page_margin: 9.0,
        }
    }
}

impl RegistryConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the system template directory
    pub fn with_system_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.system_data_dir = Some(dir.into());
        self
    }

    /// Set the user template directory
    pub fn with_user_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_data_dir = Some(dir.into());
        self
    }

    /// Do not read system templates
    pub fn without_system_dir(mut self) -> Self {
        self.system_data_dir = None;
        self
    }

    /// Do not read or write user templates
    pub fn without_user_dir(mut self) -> Self {
        self.user_data_dir = None;
        self
    }

    /// Set the margin of generated full-page templates
    pub fn with_full_page_margin(mut self, margin: f64) -> Self {
        self.full_page_margin = margin;
        self
    }
}
