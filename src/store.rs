//! Template files
//!
//! Templates are stored as TOML: a file holds a `[[template]]` array, each
//! entry with its frames, layouts and markups nested below it. Single
//! templates written on registration use the [`TEMPLATE_SUFFIX`] suffix;
//! distribution files holding many templates use [`MULTI_TEMPLATE_SUFFIX`].
//!
//! ```toml
//! [[template]]
//! name = "Avery 5160"
//! description = "Address labels"
//! page_size = "US-Letter"
//! aliases = ["Avery 5260"]
//! categories = ["label", "mail"]
//!
//! [[template.frame]]
//! id = "0"
//! shape = "rect"
//! width = 189.0
//! height = 72.0
//! radius = 4.5
//!
//! [[template.frame.layout]]
//! nx = 3
//! ny = 10
//! x0 = 11.25
//! y0 = 36.0
//! dx = 200.25
//! dy = 72.0
//!
//! [[template.frame.markup]]
//! kind = "margin"
//! size = 5.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::template::{Frame, FrameShape, Layout, Markup, Template};

/// Suffix of a file holding one template
pub const TEMPLATE_SUFFIX: &str = ".template";

/// Suffix of a file holding any number of templates
pub const MULTI_TEMPLATE_SUFFIX: &str = "-templates.toml";

/// Errors that can occur reading or writing template files
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize template: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A frame is missing a dimension its shape requires
    #[error("invalid {shape} frame '{id}' in template {template}: missing {field}")]
    InvalidFrame {
        template: String,
        id: String,
        shape: &'static str,
        field: &'static str,
    },

    /// A markup is missing a field its kind requires
    #[error("invalid {kind} markup in template {template}: missing {field}")]
    InvalidMarkup {
        template: String,
        kind: &'static str,
        field: &'static str,
    },
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads and writes template files
pub trait TemplateStore {
    /// Read every template in the file at `path`
    ///
    /// Unreadable or malformed files yield an empty list plus a diagnostic.
    fn read_templates(&self, path: &Path) -> Vec<Template>;

    /// Write a single template to `path`
    fn write_template(&self, template: &Template, path: &Path) -> Result<(), StoreError>;
}

/// True if `file_name` carries one of the template file suffixes
pub fn is_template_file(file_name: &str) -> bool {
    ends_with_ignore_case(file_name, TEMPLATE_SUFFIX)
        || ends_with_ignore_case(file_name, MULTI_TEMPLATE_SUFFIX)
}

fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    s.len() >= suffix.len()
        && s.as_bytes()[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

/// File name used when persisting a registered template
///
/// Path separators and drive colons in the name are replaced so the result is
/// always a single file name, never a path.
pub fn template_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect();
    format!("{}{}", stem, TEMPLATE_SUFFIX)
}

/// The TOML template store
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlTemplateStore;

impl TomlTemplateStore {
    pub fn new() -> Self {
        Self
    }

    /// Read templates, reporting failures instead of swallowing them
    pub fn try_read_templates(&self, path: &Path) -> Result<Vec<Template>, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        parse_templates(&content)
    }
}

impl TemplateStore for TomlTemplateStore {
    fn read_templates(&self, path: &Path) -> Vec<Template> {
        match self.try_read_templates(path) {
            Ok(templates) => templates,
            Err(e) => {
                tracing::warn!("skipping template file {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    fn write_template(&self, template: &Template, path: &Path) -> Result<(), StoreError> {
        let content = serialize_templates(std::slice::from_ref(template))?;
        std::fs::write(path, content).map_err(|e| StoreError::io(path, e))
    }
}

/// Parse templates from TOML text
pub fn parse_templates(content: &str) -> Result<Vec<Template>, StoreError> {
    let file: TomlTemplateFile = toml::from_str(content)?;
    file.template.into_iter().map(TomlTemplate::into_template).collect()
}

/// Serialize templates to TOML text
pub fn serialize_templates(templates: &[Template]) -> Result<String, StoreError> {
    let file = TomlTemplateFile {
        template: templates.iter().map(TomlTemplate::from_template).collect(),
    };
    Ok(toml::to_string(&file)?)
}

/// TOML structure for template files
#[derive(Serialize, Deserialize)]
struct TomlTemplateFile {
    #[serde(default)]
    template: Vec<TomlTemplate>,
}

#[derive(Serialize, Deserialize)]
struct TomlTemplate {
    name: String,
    #[serde(default)]
    description: String,
    page_size: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    width: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    height: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    categories: Vec<String>,
    #[serde(default)]
    frame: Vec<TomlFrame>,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "lowercase")]
enum ShapeKind {
    Rect,
    Round,
    Cd,
}

impl ShapeKind {
    fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Round => "round",
            ShapeKind::Cd => "cd",
        }
    }
}

#[derive(Serialize, Deserialize)]
struct TomlFrame {
    #[serde(default = "default_frame_id")]
    id: String,
    shape: ShapeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
    /// Corner radius for rect frames, label radius for round frames
    #[serde(default, skip_serializing_if = "Option::is_none")]
    radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    outer_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hole_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x_waste: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y_waste: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    waste: Option<f64>,
    #[serde(default)]
    layout: Vec<TomlLayout>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    markup: Vec<TomlMarkup>,
}

#[derive(Serialize, Deserialize)]
struct TomlLayout {
    nx: u32,
    ny: u32,
    #[serde(default)]
    x0: f64,
    #[serde(default)]
    y0: f64,
    #[serde(default)]
    dx: f64,
    #[serde(default)]
    dy: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "lowercase")]
enum MarkupKind {
    Margin,
    Line,
    Circle,
    Rect,
}

impl MarkupKind {
    fn as_str(self) -> &'static str {
        match self {
            MarkupKind::Margin => "margin",
            MarkupKind::Line => "line",
            MarkupKind::Circle => "circle",
            MarkupKind::Rect => "rect",
        }
    }
}

#[derive(Serialize, Deserialize, Default)]
struct TomlMarkup {
    kind: Option<MarkupKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x0: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y0: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    w: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    r: Option<f64>,
}

fn default_frame_id() -> String {
    "0".to_string()
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

impl TomlTemplate {
    fn into_template(self) -> Result<Template, StoreError> {
        let mut template = Template::new(
            &self.name,
            &self.description,
            &self.page_size,
            self.width,
            self.height,
        );
        for category in &self.categories {
            template.add_category(category);
        }
        for alias in &self.aliases {
            template.add_alias(alias);
        }
        for frame in self.frame {
            template.add_frame(frame.into_frame(&self.name)?);
        }
        Ok(template)
    }

    fn from_template(template: &Template) -> Self {
        Self {
            name: template.name().to_string(),
            description: template.description.clone(),
            page_size: template.page_size.clone(),
            width: template.page_width,
            height: template.page_height,
            aliases: template.aliases().iter().skip(1).cloned().collect(),
            categories: template.categories().to_vec(),
            frame: template.frames().iter().map(TomlFrame::from_frame).collect(),
        }
    }
}

impl TomlFrame {
    fn into_frame(self, template: &str) -> Result<Frame, StoreError> {
        let require = |value: Option<f64>, field: &'static str| {
            value.ok_or_else(|| StoreError::InvalidFrame {
                template: template.to_string(),
                id: self.id.clone(),
                shape: self.shape.as_str(),
                field,
            })
        };

        let mut frame = match self.shape {
            ShapeKind::Rect => Frame::rect(
                &self.id,
                require(self.width, "width")?,
                require(self.height, "height")?,
                self.radius.unwrap_or(0.0),
                self.x_waste.unwrap_or(0.0),
                self.y_waste.unwrap_or(0.0),
            ),
            ShapeKind::Round => Frame::round(
                &self.id,
                require(self.radius, "radius")?,
                self.waste.unwrap_or(0.0),
            ),
            ShapeKind::Cd => Frame::cd(
                &self.id,
                require(self.outer_radius, "outer_radius")?,
                require(self.hole_radius, "hole_radius")?,
                self.width.unwrap_or(0.0),
                self.height.unwrap_or(0.0),
                self.waste.unwrap_or(0.0),
            ),
        };

        for layout in &self.layout {
            frame.add_layout(Layout::new(
                layout.nx, layout.ny, layout.x0, layout.y0, layout.dx, layout.dy,
            ));
        }
        for markup in &self.markup {
            frame.add_markup(markup.to_markup(template)?);
        }
        Ok(frame)
    }

    fn from_frame(frame: &Frame) -> Self {
        let mut toml_frame = TomlFrame {
            id: frame.id.clone(),
            shape: ShapeKind::Rect,
            width: None,
            height: None,
            radius: None,
            outer_radius: None,
            hole_radius: None,
            x_waste: None,
            y_waste: None,
            waste: None,
            layout: frame
                .layouts()
                .iter()
                .map(|l| TomlLayout {
                    nx: l.nx,
                    ny: l.ny,
                    x0: l.x0,
                    y0: l.y0,
                    dx: l.dx,
                    dy: l.dy,
                })
                .collect(),
            markup: frame.markups().iter().map(TomlMarkup::from_markup).collect(),
        };

        match frame.shape {
            FrameShape::Rect {
                w,
                h,
                r,
                x_waste,
                y_waste,
            } => {
                toml_frame.width = Some(w);
                toml_frame.height = Some(h);
                toml_frame.radius = Some(r);
                toml_frame.x_waste = Some(x_waste);
                toml_frame.y_waste = Some(y_waste);
            }
            FrameShape::Round { r, waste } => {
                toml_frame.shape = ShapeKind::Round;
                toml_frame.radius = Some(r);
                toml_frame.waste = Some(waste);
            }
            FrameShape::Cd { r1, r2, w, h, waste } => {
                toml_frame.shape = ShapeKind::Cd;
                toml_frame.outer_radius = Some(r1);
                toml_frame.hole_radius = Some(r2);
                toml_frame.width = Some(w);
                toml_frame.height = Some(h);
                toml_frame.waste = Some(waste);
            }
        }
        toml_frame
    }
}

impl TomlMarkup {
    fn to_markup(&self, template: &str) -> Result<Markup, StoreError> {
        let kind = self.kind.unwrap_or(MarkupKind::Margin);
        let require = |value: Option<f64>, field: &'static str| {
            value.ok_or_else(|| StoreError::InvalidMarkup {
                template: template.to_string(),
                kind: kind.as_str(),
                field,
            })
        };

        Ok(match kind {
            MarkupKind::Margin => Markup::margin(require(self.size, "size")?),
            MarkupKind::Line => Markup::line(
                require(self.x1, "x1")?,
                require(self.y1, "y1")?,
                require(self.x2, "x2")?,
                require(self.y2, "y2")?,
            ),
            MarkupKind::Circle => Markup::circle(
                require(self.x0, "x0")?,
                require(self.y0, "y0")?,
                require(self.r, "r")?,
            ),
            MarkupKind::Rect => Markup::rect(
                require(self.x1, "x1")?,
                require(self.y1, "y1")?,
                require(self.w, "w")?,
                require(self.h, "h")?,
                self.r.unwrap_or(0.0),
            ),
        })
    }

    fn from_markup(markup: &Markup) -> Self {
        match *markup {
            Markup::Margin { size } => TomlMarkup {
                kind: Some(MarkupKind::Margin),
                size: Some(size),
                ..Default::default()
            },
            Markup::Line { x1, y1, x2, y2 } => TomlMarkup {
                kind: Some(MarkupKind::Line),
                x1: Some(x1),
                y1: Some(y1),
                x2: Some(x2),
                y2: Some(y2),
                ..Default::default()
            },
            Markup::Circle { x0, y0, r } => TomlMarkup {
                kind: Some(MarkupKind::Circle),
                x0: Some(x0),
                y0: Some(y0),
                r: Some(r),
                ..Default::default()
            },
            Markup::Rect { x1, y1, w, h, r } => TomlMarkup {
                kind: Some(MarkupKind::Rect),
                x1: Some(x1),
                y1: Some(y1),
                w: Some(w),
                h: Some(h),
                r: Some(r),
                ..Default::default()
            },
        }
    }
}
