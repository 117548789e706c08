//! Error types for the template registry

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the template registry
///
/// Everything else that can go wrong while loading or registering templates
/// is logged and skipped; only a registry with no templates at all is fatal.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("unable to locate any templates (searched: {}); label-templates may not be installed correctly", format_dirs(searched))]
    NoTemplates { searched: Vec<PathBuf> },
}

impl RegistryError {
    /// Create a no-templates error for the given search locations
    pub fn no_templates(searched: impl IntoIterator<Item = PathBuf>) -> Self {
        Self::NoTemplates {
            searched: searched.into_iter().collect(),
        }
    }
}

fn format_dirs(dirs: &[PathBuf]) -> String {
    if dirs.is_empty() {
        return "no directories configured".to_string();
    }
    dirs.iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_templates_display() {
        let err = RegistryError::no_templates(vec![
            PathBuf::from("/usr/share/label-templates/templates"),
            PathBuf::from("/home/me/.local/share/label-templates/templates"),
        ]);
        let message = err.to_string();
        assert!(message.contains("unable to locate any templates"));
        assert!(message.contains("/usr/share/label-templates/templates, /home/me"));
    }

    #[test]
    fn test_no_templates_without_dirs() {
        let err = RegistryError::no_templates(Vec::new());
        assert!(err.to_string().contains("no directories configured"));
    }
}
