//! Geometry engine for label frames
//!
//! Derives the bounding size of a frame's label shape and expands its grid
//! layouts into the page positions of every label. Everything here is a pure
//! function of the frame; nothing is cached or mutated.

pub mod types;

pub use types::{FrameSize, Origin};

use crate::template::{Frame, FrameShape};

/// Bounding size of one label of the given frame
///
/// CD frames clip each axis independently: a zero clip dimension means the
/// full disc diameter is used on that axis.
pub fn frame_size(frame: &Frame) -> FrameSize {
    match frame.shape {
        FrameShape::Rect { w, h, .. } => FrameSize::new(w, h),
        FrameShape::Round { r, .. } => FrameSize::square(2.0 * r),
        FrameShape::Cd { r1, w, h, .. } => {
            let width = if w == 0.0 { 2.0 * r1 } else { w };
            let height = if h == 0.0 { 2.0 * r1 } else { h };
            FrameSize::new(width, height)
        }
    }
}

/// Total number of labels per sheet across all layouts of the frame
pub fn label_count(frame: &Frame) -> usize {
    frame.layouts().iter().map(|layout| layout.count()).sum()
}

/// Page positions of every label in the frame, in reading order
///
/// Each layout is expanded row by row, then the combined set is sorted by
/// `y` and then `x` so that label numbering does not depend on how many
/// layouts contributed or in which order they were declared.
pub fn origins(frame: &Frame) -> Vec<Origin> {
    let mut origins = Vec::with_capacity(label_count(frame));

    for layout in frame.layouts() {
        for iy in 0..layout.ny {
            for ix in 0..layout.nx {
                origins.push(Origin::new(
                    layout.x0 + ix as f64 * layout.dx,
                    layout.y0 + iy as f64 * layout.dy,
                ));
            }
        }
    }

    origins.sort_by(Origin::reading_order);
    origins
}
