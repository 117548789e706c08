//! The template record: page description, names and frames

use std::fmt::Write as _;

use super::frame::Frame;
use super::eq_ignore_case;

/// A named printable page layout
///
/// The alias list always starts with the primary name. Categories, aliases and
/// frames are append-only.
#[derive(Debug, PartialEq)]
pub struct Template {
    name: String,
    pub description: String,
    /// Page size id, resolved against a paper registry
    pub page_size: String,
    /// Explicit page width in points, only meaningful for custom page sizes
    pub page_width: f64,
    /// Explicit page height in points, only meaningful for custom page sizes
    pub page_height: f64,
    aliases: Vec<String>,
    categories: Vec<String>,
    frames: Vec<Frame>,
}

impl Template {
    /// Create a template with no categories or frames
    ///
    /// Pass zero page dimensions unless `page_size` is the custom sentinel;
    /// real dimensions otherwise come from the paper registry.
    pub fn new(
        name: &str,
        description: &str,
        page_size: &str,
        page_width: f64,
        page_height: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            page_size: page_size.to_string(),
            page_width,
            page_height,
            aliases: vec![name.to_string()],
            categories: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Primary name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All names of this template, primary name first
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    /// First frame; templates currently carry a single frame
    pub fn first_frame(&self) -> Option<&Frame> {
        self.frames.first()
    }

    pub fn add_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn add_category(&mut self, category: &str) {
        self.categories.push(category.to_string());
    }

    pub fn add_alias(&mut self, alias: &str) {
        self.aliases.push(alias.to_string());
    }

    /// True if `page_size` is `None` or names this template's page size
    pub fn matches_page_size(&self, page_size: Option<&str>) -> bool {
        match page_size {
            None => true,
            Some(id) => eq_ignore_case(id, &self.page_size),
        }
    }

    /// True if `category` is `None` or is one of this template's categories
    pub fn matches_category(&self, category: Option<&str>) -> bool {
        match category {
            None => true,
            Some(id) => self.categories.iter().any(|c| eq_ignore_case(id, c)),
        }
    }

    /// True if `name` equals any alias, ignoring case
    pub fn has_alias(&self, name: &str) -> bool {
        self.aliases.iter().any(|alias| eq_ignore_case(alias, name))
    }

    /// Deep copy sharing nothing with the original
    ///
    /// The copy is rebuilt through [`Template::new`], which seeds the alias
    /// list with the primary name, so any alias equal to the primary name is
    /// skipped when the remaining aliases are appended.
    pub fn duplicate(&self) -> Template {
        let mut template = Template::new(
            &self.name,
            &self.description,
            &self.page_size,
            self.page_width,
            self.page_height,
        );

        for category in &self.categories {
            template.add_category(category);
        }
        for frame in &self.frames {
            template.add_frame(frame.duplicate());
        }
        for alias in &self.aliases {
            if !eq_ignore_case(&template.name, alias) {
                template.add_alias(alias);
            }
        }
        template
    }

    /// Release the template and everything it owns
    pub fn release(self) {}

    /// One `Alias = "..."` line per alias
    pub fn aliases_report(&self) -> String {
        let mut out = String::new();
        for alias in &self.aliases {
            let _ = writeln!(out, "Alias = \"{}\"", alias);
        }
        out
    }
}

impl Clone for Template {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}
