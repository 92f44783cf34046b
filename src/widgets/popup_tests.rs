//! Tests for widgets/popup

use super::*;

#[test]
fn test_popup_above_anchor_basic() {
    let anchor = Rect::new(0, 20, 80, 3);

    let popup = popup_above_anchor(anchor, 30, 5, 2);

    assert_eq!(popup, Rect::new(2, 15, 30, 5));
}

#[test]
fn test_popup_above_anchor_clamps_height_to_space_above() {
    let anchor = Rect::new(0, 3, 80, 3);

    let popup = popup_above_anchor(anchor, 30, 12, 2);

    assert_eq!(popup.y, 0);
    assert_eq!(popup.height, 3);
}

#[test]
fn test_popup_above_anchor_clamps_width() {
    let anchor = Rect::new(0, 20, 20, 3);

    let popup = popup_above_anchor(anchor, 50, 4, 2);

    assert_eq!(popup.x, 2);
    assert_eq!(popup.width, 18);
}

#[test]
fn test_popup_above_anchor_at_top_has_no_height() {
    let anchor = Rect::new(0, 0, 80, 3);

    let popup = popup_above_anchor(anchor, 30, 5, 2);

    assert_eq!(popup.height, 0);
}

#[test]
fn test_popup_above_anchor_offset_wider_than_anchor() {
    let anchor = Rect::new(5, 10, 4, 3);

    let popup = popup_above_anchor(anchor, 30, 5, 10);

    assert_eq!(popup.x, 9);
    assert_eq!(popup.width, 0);
}
