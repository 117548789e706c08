//! Decorative guide shapes drawn over a label
//!
//! Markups are carried through duplication but never take part in geometry.

/// A guide shape, in label coordinates (points)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Markup {
    /// Safe-area margin inset from the label edge
    Margin { size: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Circle { x0: f64, y0: f64, r: f64 },
    Rect {
        x1: f64,
        y1: f64,
        w: f64,
        h: f64,
        r: f64,
    },
}

impl Markup {
    pub fn margin(size: f64) -> Self {
        Markup::Margin { size }
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Markup::Line { x1, y1, x2, y2 }
    }

    pub fn circle(x0: f64, y0: f64, r: f64) -> Self {
        Markup::Circle { x0, y0, r }
    }

    pub fn rect(x1: f64, y1: f64, w: f64, h: f64, r: f64) -> Self {
        Markup::Rect { x1, y1, w, h, r }
    }

    /// Short lowercase name of the markup kind
    pub fn kind(&self) -> &'static str {
        match self {
            Markup::Margin { .. } => "margin",
            Markup::Line { .. } => "line",
            Markup::Circle { .. } => "circle",
            Markup::Rect { .. } => "rect",
        }
    }
}
