//! Label frames and the grid layouts that place them on a page

use super::markup::Markup;
use crate::geometry::{self, FrameSize, Origin};

/// Shape of one label, with the shape-specific dimensions in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameShape {
    /// Rectangular label or card with optional rounded corners
    Rect {
        w: f64,
        h: f64,
        /// Corner radius, 0 for square corners
        r: f64,
        /// Horizontal overprint allowance
        x_waste: f64,
        /// Vertical overprint allowance
        y_waste: f64,
    },
    /// Round label
    Round { r: f64, waste: f64 },
    /// CD/DVD label with a center hole, optionally clipped to a card
    Cd {
        /// Outer radius
        r1: f64,
        /// Center hole radius
        r2: f64,
        /// Clip width, 0 for no clipping
        w: f64,
        /// Clip height, 0 for no clipping
        h: f64,
        waste: f64,
    },
}

impl FrameShape {
    /// Short lowercase name of the shape
    pub fn kind(&self) -> &'static str {
        match self {
            FrameShape::Rect { .. } => "rect",
            FrameShape::Round { .. } => "round",
            FrameShape::Cd { .. } => "cd",
        }
    }
}

/// One rectangular grid of identical label positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub nx: u32,
    pub ny: u32,
    /// Position of the first label
    pub x0: f64,
    pub y0: f64,
    /// Pitch between adjacent labels
    pub dx: f64,
    pub dy: f64,
}

impl Layout {
    pub fn new(nx: u32, ny: u32, x0: f64, y0: f64, dx: f64, dy: f64) -> Self {
        Self {
            nx,
            ny,
            x0,
            y0,
            dx,
            dy,
        }
    }

    /// Number of labels in this grid
    pub fn count(&self) -> usize {
        self.nx as usize * self.ny as usize
    }
}

/// A label shape together with its layouts and guide markups
///
/// Layouts and markups are append-only; the frame owns them.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Frame id, currently always "0"
    pub id: String,
    pub shape: FrameShape,
    layouts: Vec<Layout>,
    markups: Vec<Markup>,
}

impl Frame {
    fn with_shape(id: &str, shape: FrameShape) -> Self {
        Self {
            id: id.to_string(),
            shape,
            layouts: Vec::new(),
            markups: Vec::new(),
        }
    }

    /// Create a frame for a rectangular label or card
    pub fn rect(id: &str, w: f64, h: f64, r: f64, x_waste: f64, y_waste: f64) -> Self {
        Self::with_shape(
            id,
            FrameShape::Rect {
                w,
                h,
                r,
                x_waste,
                y_waste,
            },
        )
    }

    /// Create a frame for a round label
    pub fn round(id: &str, r: f64, waste: f64) -> Self {
        Self::with_shape(id, FrameShape::Round { r, waste })
    }

    /// Create a frame for a CD/DVD label
    ///
    /// `w` and `h` clip the disc for business-card CDs; pass 0 for a full disc.
    pub fn cd(id: &str, r1: f64, r2: f64, w: f64, h: f64, waste: f64) -> Self {
        Self::with_shape(id, FrameShape::Cd { r1, r2, w, h, waste })
    }

    /// Append a layout
    pub fn add_layout(&mut self, layout: Layout) {
        self.layouts.push(layout);
    }

    /// Append a markup
    pub fn add_markup(&mut self, markup: Markup) {
        self.markups.push(markup);
    }

    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn layouts_mut(&mut self) -> &mut [Layout] {
        &mut self.layouts
    }

    pub fn markups(&self) -> &[Markup] {
        &self.markups
    }

    /// Deep copy: rebuilt through the shape constructor, then every layout
    /// and markup copied over
    pub fn duplicate(&self) -> Frame {
        let mut frame = match self.shape {
            FrameShape::Rect {
                w,
                h,
                r,
                x_waste,
                y_waste,
            } => Frame::rect(&self.id, w, h, r, x_waste, y_waste),
            FrameShape::Round { r, waste } => Frame::round(&self.id, r, waste),
            FrameShape::Cd { r1, r2, w, h, waste } => Frame::cd(&self.id, r1, r2, w, h, waste),
        };

        for layout in &self.layouts {
            frame.add_layout(*layout);
        }
        for markup in &self.markups {
            frame.add_markup(*markup);
        }
        frame
    }

    /// Release the frame with its layouts and markups
    pub fn release(self) {}

    /// Bounding size of one label
    pub fn size(&self) -> FrameSize {
        geometry::frame_size(self)
    }

    /// Number of labels per sheet
    pub fn label_count(&self) -> usize {
        geometry::label_count(self)
    }

    /// Label positions in reading order
    pub fn origins(&self) -> Vec<Origin> {
        geometry::origins(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn business_card_sheet() -> Frame {
        let mut frame = Frame::rect("0", 252.0, 144.0, 0.0, 0.0, 0.0);
        frame.add_layout(Layout::new(2, 5, 54.0, 36.0, 252.0, 144.0));
        frame.add_markup(Markup::margin(9.0));
        frame
    }

    #[test]
    fn test_layout_count() {
        assert_eq!(Layout::new(3, 10, 0.0, 0.0, 1.0, 1.0).count(), 30);
        assert_eq!(Layout::new(0, 10, 0.0, 0.0, 1.0, 1.0).count(), 0);
    }

    #[test]
    fn test_shape_kind() {
        assert_eq!(Frame::rect("0", 1.0, 1.0, 0.0, 0.0, 0.0).shape.kind(), "rect");
        assert_eq!(Frame::round("0", 1.0, 0.0).shape.kind(), "round");
        assert_eq!(Frame::cd("0", 2.0, 1.0, 0.0, 0.0, 0.0).shape.kind(), "cd");
    }

    #[test]
    fn test_duplicate_copies_everything() {
        let frame = business_card_sheet();
        let copy = frame.duplicate();
        assert_eq!(copy, frame);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let frame = business_card_sheet();
        let mut copy = frame.duplicate();

        copy.add_layout(Layout::new(1, 1, 0.0, 0.0, 0.0, 0.0));
        copy.add_markup(Markup::line(0.0, 0.0, 10.0, 10.0));
        copy.layouts_mut()[0].nx = 7;
        copy.id.push('1');

        assert_eq!(frame.layouts().len(), 1);
        assert_eq!(frame.layouts()[0].nx, 2);
        assert_eq!(frame.markups().len(), 1);
        assert_eq!(frame.id, "0");
    }

    #[test]
    fn test_duplicate_preserves_cd_fields() {
        let frame = Frame::cd("0", 166.5, 58.5, 0.0, 200.0, 3.0);
        let copy = frame.duplicate();
        assert_eq!(
            copy.shape,
            FrameShape::Cd {
                r1: 166.5,
                r2: 58.5,
                w: 0.0,
                h: 200.0,
                waste: 3.0
            }
        );
    }

    #[test]
    fn test_geometry_shortcuts() {
        let frame = business_card_sheet();
        assert_eq!(frame.size(), FrameSize::new(252.0, 144.0));
        assert_eq!(frame.label_count(), 10);
        assert_eq!(frame.origins().len(), 10);
        assert_eq!(frame.origins()[1], Origin::new(306.0, 36.0));
    }
}
