//! Geometry properties that hold for every frame shape and layout mix

use label_templates::{frame_size, label_count, origins, Frame, FrameSize, Layout, Origin};
use pretty_assertions::assert_eq;

fn sample_frames() -> Vec<Frame> {
    let mut business_cards = Frame::rect("0", 252.0, 144.0, 0.0, 0.0, 0.0);
    business_cards.add_layout(Layout::new(2, 5, 54.0, 36.0, 252.0, 144.0));

    let mut round = Frame::round("0", 36.0, 2.0);
    round.add_layout(Layout::new(6, 8, 18.0, 18.0, 96.0, 96.0));
    round.add_layout(Layout::new(5, 8, 66.0, 66.0, 96.0, 96.0));

    let mut cd = Frame::cd("0", 166.5, 58.5, 0.0, 0.0, 9.0);
    cd.add_layout(Layout::new(1, 2, 139.5, 49.5, 0.0, 360.0));

    let empty = Frame::cd("0", 120.0, 20.0, 240.0, 170.0, 0.0);

    vec![business_cards, round, cd, empty]
}

#[test]
fn test_origin_count_matches_label_count() {
    for frame in sample_frames() {
        let expected: usize = frame
            .layouts()
            .iter()
            .map(|l| l.nx as usize * l.ny as usize)
            .sum();
        assert_eq!(label_count(&frame), expected);
        assert_eq!(origins(&frame).len(), expected);
    }
}

#[test]
fn test_origins_in_reading_order() {
    for frame in sample_frames() {
        for pair in origins(&frame).windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.y < b.y || (a.y == b.y && a.x <= b.x),
                "{:?} before {:?}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_sizes_by_shape() {
    let frames = sample_frames();
    assert_eq!(frame_size(&frames[0]), FrameSize::new(252.0, 144.0));
    assert_eq!(frame_size(&frames[1]), FrameSize::new(72.0, 72.0));
    assert_eq!(frame_size(&frames[2]), FrameSize::new(333.0, 333.0));
    assert_eq!(frame_size(&frames[3]), FrameSize::new(240.0, 170.0));
}

#[test]
fn test_documented_two_by_two_grid() {
    let mut frame = Frame::rect("0", 90.0, 140.0, 0.0, 0.0, 0.0);
    frame.add_layout(Layout::new(2, 2, 10.0, 10.0, 100.0, 150.0));

    assert_eq!(
        origins(&frame),
        vec![
            Origin::new(10.0, 10.0),
            Origin::new(110.0, 10.0),
            Origin::new(10.0, 160.0),
            Origin::new(110.0, 160.0),
        ]
    );
}
