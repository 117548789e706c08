//! Label Templates - registry and geometry engine for label and card sheets
//!
//! This library holds the definitions of printable label sheets (page size,
//! label shape and the grid placing labels on the page), answers queries over
//! the known set and computes where every label sits on a sheet.
//!
//! # Example
//!
//! ```rust
//! use label_templates::template::{Frame, Layout, Template};
//! use label_templates::Origin;
//!
//! let mut template = Template::new("Avery 5371", "Business cards", "US-Letter", 0.0, 0.0);
//! let mut frame = Frame::rect("0", 252.0, 144.0, 0.0, 0.0, 0.0);
//! frame.add_layout(Layout::new(2, 5, 54.0, 36.0, 252.0, 144.0));
//! template.add_frame(frame);
//!
//! let origins = template.first_frame().unwrap().origins();
//! assert_eq!(origins.len(), 10);
//! assert_eq!(origins[1], Origin::new(306.0, 36.0));
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod paper;
pub mod registry;
pub mod store;
pub mod template;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use geometry::{frame_size, label_count, origins, FrameSize, Origin};
pub use paper::{Paper, PaperCatalog, PaperSource};
pub use registry::{free_name_list, Lookup, Registration, TemplateRegistry};
pub use store::{StoreError, TemplateStore, TomlTemplateStore};
pub use template::{Frame, FrameShape, Layout, Markup, Template};
