//! Registry of known templates
//!
//! The registry is populated lazily on first use: templates are read from the
//! system directory, then the user directory, and one generic full-page
//! template is synthesized per known page size. Every template handed out is
//! an independent copy owned by the caller.
//!
//! # Example
//!
//! ```rust
//! use label_templates::paper::PaperCatalog;
//! use label_templates::registry::TemplateRegistry;
//! use label_templates::store::TomlTemplateStore;
//! use label_templates::RegistryConfig;
//!
//! let config = RegistryConfig::new().without_system_dir().without_user_dir();
//! let mut registry = TemplateRegistry::new(config, PaperCatalog::default(), TomlTemplateStore);
//!
//! let found = registry.lookup_by_name(Some("generic a4 full page")).unwrap();
//! assert!(found.is_exact());
//! assert_eq!(found.template().page_size, "A4");
//! ```

pub mod loader;

use std::fmt::Write as _;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::paper::{PaperCatalog, PaperSource};
use crate::store::{template_file_name, TemplateStore, TomlTemplateStore};
use crate::template::{cmp_ignore_case, eq_ignore_case, Template};

/// Outcome of a name lookup
///
/// Lookups never come back empty-handed: an unknown name yields the first
/// registered template, flagged as a fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// A template answering to the requested name
    Exact(Template),
    /// The default template, returned because nothing matched
    Fallback(Template),
}

impl Lookup {
    pub fn template(&self) -> &Template {
        match self {
            Lookup::Exact(t) | Lookup::Fallback(t) => t,
        }
    }

    pub fn into_template(self) -> Template {
        match self {
            Lookup::Exact(t) | Lookup::Fallback(t) => t,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Lookup::Exact(_))
    }
}

/// Outcome of registering a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Added to the registry and persisted to the user directory
    Added,
    /// A template answering to the same name already exists; nothing changed
    AlreadyKnown,
    /// The template's page size is not a known id; nothing changed
    UnknownPageSize,
}

/// Release a name list obtained from [`TemplateRegistry::list_names_unique`]
/// or [`TemplateRegistry::list_names_all`]
pub fn free_name_list(names: Vec<String>) {
    drop(names);
}

/// Process-wide set of known templates
pub struct TemplateRegistry<P = PaperCatalog, S = TomlTemplateStore> {
    config: RegistryConfig,
    papers: P,
    store: S,
    templates: Vec<Template>,
    initialized: bool,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new(
            RegistryConfig::default(),
            PaperCatalog::default(),
            TomlTemplateStore,
        )
    }
}

impl<P: PaperSource, S: TemplateStore> TemplateRegistry<P, S> {
    /// Create an empty registry; it is populated on first use
    pub fn new(config: RegistryConfig, papers: P, store: S) -> Self {
        Self {
            config,
            papers,
            store,
            templates: Vec::new(),
            initialized: false,
        }
    }

    /// Create a registry holding exactly `templates`, skipping population
    pub fn seeded(config: RegistryConfig, papers: P, store: S, templates: Vec<Template>) -> Self {
        Self {
            config,
            papers,
            store,
            templates,
            initialized: true,
        }
    }

    pub fn papers(&self) -> &P {
        &self.papers
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of templates currently held
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Populate the registry unless that already happened
    ///
    /// Fails only when no template at all could be found or generated; the
    /// next call then retries.
    pub fn ensure_initialized(&mut self) -> Result<(), RegistryError> {
        if self.initialized {
            return Ok(());
        }

        let mut templates = loader::read_templates(&self.config, &self.store);
        templates.extend(loader::full_page_templates(
            &self.papers,
            self.config.full_page_margin,
        ));

        if templates.is_empty() {
            let err = RegistryError::no_templates(
                [&self.config.system_data_dir, &self.config.user_data_dir]
                    .into_iter()
                    .flatten()
                    .cloned(),
            );
            tracing::error!("{}", err);
            return Err(err);
        }

        tracing::debug!("template registry holds {} templates", templates.len());
        self.templates = templates;
        self.initialized = true;
        Ok(())
    }

    /// Add a user template and persist it to the user directory
    ///
    /// A template whose name matches any existing alias is assumed to be the
    /// same template and is ignored. Templates with an unknown page size are
    /// rejected with a diagnostic.
    pub fn register(&mut self, template: &Template) -> Result<Registration, RegistryError> {
        self.ensure_initialized()?;

        if self.find(template.name()).is_some() {
            tracing::debug!("template {} already registered", template.name());
            return Ok(Registration::AlreadyKnown);
        }

        if !self.papers.is_known(&template.page_size) {
            tracing::info!(
                "Cannot register new template {} with unknown page size {}",
                template.name(),
                template.page_size
            );
            return Ok(Registration::UnknownPageSize);
        }

        self.templates.push(template.duplicate());
        self.persist(template);
        Ok(Registration::Added)
    }

    fn persist(&self, template: &Template) {
        let Some(dir) = &self.config.user_data_dir else {
            tracing::debug!("no user template directory; {} kept in memory only", template.name());
            return;
        };

        if let Err(e) = std::fs::create_dir_all(dir) {
            tracing::warn!("cannot create user template directory {}: {}", dir.display(), e);
        }

        let path = dir.join(template_file_name(template.name()));
        if path.parent() != Some(dir.as_path()) {
            tracing::warn!("cannot save template {}: name is not a file name", template.name());
            return;
        }
        if let Err(e) = self.store.write_template(template, &path) {
            tracing::warn!("cannot save template {}: {}", template.name(), e);
        }
    }

    /// First template answering to `name` under any of its aliases
    fn find(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.has_alias(name))
    }

    /// Copy of the template answering to `name`
    ///
    /// `None` or an unknown name yields a copy of the first registered
    /// template as a [`Lookup::Fallback`].
    pub fn lookup_by_name(&mut self, name: Option<&str>) -> Result<Lookup, RegistryError> {
        self.ensure_initialized()?;

        if let Some(template) = name.and_then(|name| self.find(name)) {
            return Ok(Lookup::Exact(template.duplicate()));
        }

        match self.templates.first() {
            Some(template) => Ok(Lookup::Fallback(template.duplicate())),
            None => Err(RegistryError::no_templates(Vec::new())),
        }
    }

    fn matching<'a>(
        &'a self,
        page_size: Option<&'a str>,
        category: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Template> + 'a {
        self.templates
            .iter()
            .filter(move |t| t.matches_page_size(page_size) && t.matches_category(category))
    }

    /// Primary names of matching templates, sorted ignoring case
    ///
    /// Each name appears once even if several templates share it.
    pub fn list_names_unique(
        &mut self,
        page_size: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<String>, RegistryError> {
        self.ensure_initialized()?;

        let mut names: Vec<String> = self
            .matching(page_size, category)
            .map(|t| t.name().to_string())
            .collect();
        names.sort_by(|a, b| cmp_ignore_case(a, b));
        names.dedup_by(|a, b| eq_ignore_case(a, b));
        Ok(names)
    }

    /// Every alias of every matching template, sorted ignoring case
    pub fn list_names_all(
        &mut self,
        page_size: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<String>, RegistryError> {
        self.ensure_initialized()?;

        let mut names: Vec<String> = self
            .matching(page_size, category)
            .flat_map(|t| t.aliases().iter().cloned())
            .collect();
        names.sort_by(|a, b| cmp_ignore_case(a, b));
        Ok(names)
    }

    /// One `TEMPLATE name="...", description="..."` line per template
    pub fn known_templates_report(&mut self) -> Result<String, RegistryError> {
        self.ensure_initialized()?;

        let mut out = String::new();
        for template in &self.templates {
            let _ = writeln!(
                out,
                "TEMPLATE name=\"{}\", description=\"{}\"",
                template.name(),
                template.description
            );
        }
        Ok(out)
    }

    /// Tear the registry down, releasing every template
    pub fn shutdown(self) {
        tracing::debug!("releasing {} templates", self.templates.len());
    }
}
