//! Integration tests for the template registry against real template directories

use std::fs;
use std::path::Path;

use label_templates::store::{parse_templates, TEMPLATE_SUFFIX};
use label_templates::{
    Frame, Layout, Origin, PaperCatalog, Registration, RegistryConfig, RegistryError, Template,
    TemplateRegistry, TomlTemplateStore,
};
use pretty_assertions::assert_eq;

const SYSTEM_TEMPLATES: &str = r#"
[[template]]
name = "Avery 5160"
description = "Address labels"
page_size = "US-Letter"
aliases = ["Avery 5260"]
categories = ["label", "mail"]

[[template.frame]]
shape = "rect"
width = 189
height = 72
radius = 4.5

[[template.frame.layout]]
nx = 3
ny = 10
x0 = 11.25
y0 = 36
dx = 200.25
dy = 72

[[template]]
name = "Avery 8293"
description = "Round labels"
page_size = "US-Letter"
categories = ["label", "round-label"]

[[template.frame]]
shape = "round"
radius = 54
waste = 4.5

[[template.frame.layout]]
nx = 4
ny = 5
x0 = 18
y0 = 36
dx = 144
dy = 144
"#;

const USER_TEMPLATE: &str = r#"
[[template]]
name = "Shelf tags"
description = "Staggered shelf tags"
page_size = "A4"
categories = ["label"]

[[template.frame]]
shape = "rect"
width = 100
height = 40

[[template.frame.layout]]
nx = 2
ny = 2
x0 = 10
y0 = 10
dx = 200
dy = 100

[[template.frame.layout]]
nx = 2
ny = 2
x0 = 110
y0 = 60
dx = 200
dy = 100
"#;

fn registry_for(system: &Path, user: &Path) -> TemplateRegistry {
    let config = RegistryConfig::new()
        .with_system_dir(system)
        .with_user_dir(user);
    TemplateRegistry::new(config, PaperCatalog::default(), TomlTemplateStore::new())
}

fn populated_dirs() -> (tempfile::TempDir, tempfile::TempDir) {
    let system = tempfile::tempdir().expect("tempdir");
    let user = tempfile::tempdir().expect("tempdir");
    fs::write(system.path().join("avery-us-templates.toml"), SYSTEM_TEMPLATES).unwrap();
    fs::write(user.path().join("Shelf tags.template"), USER_TEMPLATE).unwrap();
    (system, user)
}

fn full_page_count() -> usize {
    PaperCatalog::default().papers().len() - 1
}

#[test]
fn test_loads_system_user_and_full_pages() {
    let (system, user) = populated_dirs();
    let mut registry = registry_for(system.path(), user.path());

    registry.ensure_initialized().expect("Should load");
    assert_eq!(registry.len(), 3 + full_page_count());

    // System templates come first, so the first one is the default.
    let default = registry.lookup_by_name(None).unwrap();
    assert_eq!(default.template().name(), "Avery 5160");
}

#[test]
fn test_filters_by_page_size_and_category() {
    let (system, user) = populated_dirs();
    let mut registry = registry_for(system.path(), user.path());

    let letter_labels = registry
        .list_names_unique(Some("us-letter"), Some("label"))
        .unwrap();
    assert_eq!(letter_labels, vec!["Avery 5160", "Avery 8293"]);

    let a4 = registry.list_names_unique(Some("A4"), None).unwrap();
    assert_eq!(a4, vec!["Generic A4 full page", "Shelf tags"]);

    let all_letter_labels = registry
        .list_names_all(Some("US-Letter"), Some("label"))
        .unwrap();
    assert_eq!(
        all_letter_labels,
        vec!["Avery 5160", "Avery 5260", "Avery 8293"]
    );
}

#[test]
fn test_unique_never_exceeds_matching_templates() {
    let (system, user) = populated_dirs();
    let mut registry = registry_for(system.path(), user.path());

    let unique = registry.list_names_unique(None, None).unwrap();
    let all = registry.list_names_all(None, None).unwrap();
    assert!(unique.len() <= registry.len());
    assert_eq!(all.len(), registry.len() + 1);

    for pair in unique.windows(2) {
        assert!(!pair[0].eq_ignore_ascii_case(&pair[1]));
    }
}

#[test]
fn test_staggered_layouts_in_reading_order() {
    let (system, user) = populated_dirs();
    let mut registry = registry_for(system.path(), user.path());

    let template = registry
        .lookup_by_name(Some("SHELF TAGS"))
        .unwrap()
        .into_template();
    let frame = template.first_frame().expect("Should have a frame");

    assert_eq!(frame.label_count(), 8);
    assert_eq!(
        frame.origins(),
        vec![
            Origin::new(10.0, 10.0),
            Origin::new(210.0, 10.0),
            Origin::new(110.0, 60.0),
            Origin::new(310.0, 60.0),
            Origin::new(10.0, 110.0),
            Origin::new(210.0, 110.0),
            Origin::new(110.0, 160.0),
            Origin::new(310.0, 160.0),
        ]
    );
}

#[test]
fn test_register_persists_to_user_dir() {
    let (system, user) = populated_dirs();
    let user_dir = user.path().join("nested");
    let mut registry = registry_for(system.path(), &user_dir);

    let mut template = Template::new("Freezer labels", "Small freezer labels", "A4", 0.0, 0.0);
    template.add_alias("Cold 21");
    template.add_category("label");
    let mut frame = Frame::rect("0", 180.0, 100.0, 6.0, 0.0, 0.0);
    frame.add_layout(Layout::new(3, 7, 9.0, 21.0, 190.0, 112.0));
    template.add_frame(frame);

    let before = registry.list_names_unique(None, None).unwrap().len();
    assert_eq!(registry.register(&template).unwrap(), Registration::Added);
    assert_eq!(
        registry.list_names_unique(None, None).unwrap().len(),
        before + 1
    );

    let written = user_dir.join(format!("Freezer labels{}", TEMPLATE_SUFFIX));
    let content = fs::read_to_string(&written).expect("Should have been written");
    assert_eq!(parse_templates(&content).unwrap(), vec![template.clone()]);

    // A fresh registry picks the new template up from the user directory.
    let mut reloaded = registry_for(system.path(), &user_dir);
    let found = reloaded.lookup_by_name(Some("cold 21")).unwrap();
    assert!(found.is_exact());
    assert_eq!(found.into_template(), template);
}

#[test]
fn test_register_twice_is_noop() {
    let (system, user) = populated_dirs();
    let mut registry = registry_for(system.path(), user.path());

    let template = Template::new("avery 5260", "", "US-Letter", 0.0, 0.0);
    let count = registry.list_names_all(None, None).unwrap().len();
    assert_eq!(
        registry.register(&template).unwrap(),
        Registration::AlreadyKnown
    );
    assert_eq!(registry.list_names_all(None, None).unwrap().len(), count);
    assert!(!user.path().join("avery 5260.template").exists());
}

#[test]
fn test_register_unknown_page_size_writes_nothing() {
    let (system, user) = populated_dirs();
    let mut registry = registry_for(system.path(), user.path());

    let template = Template::new("Mystery", "", "Papyrus", 0.0, 0.0);
    registry.ensure_initialized().unwrap();
    let count = registry.len();

    assert_eq!(
        registry.register(&template).unwrap(),
        Registration::UnknownPageSize
    );
    assert_eq!(registry.len(), count);
    assert!(!user.path().join("Mystery.template").exists());
}

#[test]
fn test_broken_files_are_skipped() {
    let (system, user) = populated_dirs();
    fs::write(system.path().join("broken-templates.toml"), "[[template]]\nname = ").unwrap();
    let mut registry = registry_for(system.path(), user.path());

    registry.ensure_initialized().expect("Should load the rest");
    assert_eq!(registry.len(), 3 + full_page_count());
}

#[test]
fn test_no_templates_anywhere_is_fatal() {
    let empty = tempfile::tempdir().expect("tempdir");
    let config = RegistryConfig::new()
        .with_system_dir(empty.path())
        .with_user_dir(empty.path().join("missing"));
    let mut registry = TemplateRegistry::new(
        config,
        PaperCatalog::new(Vec::new()),
        TomlTemplateStore::new(),
    );

    let err = registry.list_names_all(None, None).unwrap_err();
    let RegistryError::NoTemplates { searched } = &err;
    assert_eq!(searched.len(), 2);
    assert!(err.to_string().contains("unable to locate any templates"));
}
