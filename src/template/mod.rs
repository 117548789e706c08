//! Template entity model
//!
//! A [`Template`] describes one printable sheet: its page size, the names it
//! is sold under, the categories it belongs to and one or more [`Frame`]s.
//! A frame carries the label shape, the [`Layout`] grids that repeat it over
//! the page and decorative [`Markup`] guides.
//!
//! # Example
//!
//! ```rust
//! use label_templates::template::{Frame, Layout, Markup, Template};
//!
//! let mut template = Template::new("Avery 5160", "Address labels", "US-Letter", 0.0, 0.0);
//! template.add_alias("Avery 5260");
//! template.add_category("label");
//!
//! let mut frame = Frame::rect("0", 189.0, 72.0, 4.5, 0.0, 0.0);
//! frame.add_layout(Layout::new(3, 10, 11.25, 36.0, 200.25, 72.0));
//! frame.add_markup(Markup::margin(5.0));
//! template.add_frame(frame);
//!
//! assert_eq!(template.first_frame().unwrap().label_count(), 30);
//! ```

mod frame;
mod markup;
mod model;

pub use frame::{Frame, FrameShape, Layout};
pub use markup::Markup;
pub use model::Template;

use std::cmp::Ordering;

/// ASCII case-insensitive equality, used for every name and id comparison
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// ASCII case-insensitive ordering for name lists
pub(crate) fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|b| b.to_ascii_lowercase())
        .cmp(b.bytes().map(|b| b.to_ascii_lowercase()))
}
