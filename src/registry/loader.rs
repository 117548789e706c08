//! Populating the registry from template directories and the paper catalog

use std::path::Path;

use crate::config::RegistryConfig;
use crate::paper::{Paper, PaperSource};
use crate::store::{is_template_file, TemplateStore};
use crate::template::{Frame, Layout, Markup, Template};

/// Description given to every generated full-page template
pub const FULL_PAGE: &str = "Full-page";

/// Read the system directory, then the user directory
///
/// Templates are appended in that order with no de-duplication.
pub fn read_templates<S: TemplateStore>(config: &RegistryConfig, store: &S) -> Vec<Template> {
    let mut templates = Vec::new();

    for dir in [&config.system_data_dir, &config.user_data_dir]
        .into_iter()
        .flatten()
    {
        read_template_files_from_dir(&mut templates, dir, store);
    }
    templates
}

/// Append every template found in `dir` to `templates`
///
/// A missing directory is silently skipped; one that cannot be listed is
/// skipped with a warning. Files are visited in name order.
pub fn read_template_files_from_dir<S: TemplateStore>(
    templates: &mut Vec<Template>,
    dir: &Path,
    store: &S,
) {
    if !dir.exists() {
        return;
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("cannot open data directory {}: {}", dir.display(), e);
            return;
        }
    };

    let mut paths: Vec<_> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                tracing::warn!("cannot read entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(is_template_file)
        })
        .collect();
    paths.sort();

    for path in paths {
        let found = store.read_templates(&path);
        tracing::debug!("read {} template(s) from {}", found.len(), path.display());
        templates.extend(found);
    }
}

/// One generated full-page template per known page size, skipping the
/// custom-dimensions sentinel
pub fn full_page_templates<P: PaperSource>(papers: &P, margin: f64) -> Vec<Template> {
    papers
        .ids()
        .iter()
        .filter(|id| !papers.is_other(id))
        .filter_map(|id| papers.lookup(id))
        .map(|paper| full_page_template(&paper, margin))
        .collect()
}

/// A template covering the whole page with a single label
pub fn full_page_template(paper: &Paper, margin: f64) -> Template {
    let name = format!("Generic {} full page", paper.id);
    let mut template = Template::new(&name, FULL_PAGE, &paper.id, paper.width, paper.height);

    let mut frame = Frame::rect("0", paper.width, paper.height, 0.0, 0.0, 0.0);
    frame.add_layout(Layout::new(1, 1, 0.0, 0.0, 0.0, 0.0));
    frame.add_markup(Markup::margin(margin));
    template.add_frame(frame);

    template
}
