use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly above `anchor`, shifted right by `x_offset`
///
/// The popup never extends past the anchor's right edge or above row 0.
pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let x_offset = x_offset.min(anchor.width);
    let available_width = anchor.width.saturating_sub(x_offset);
    let height = height.min(anchor.y);

    Rect {
        x: anchor.x + x_offset,
        y: anchor.y - height,
        width: width.min(available_width),
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
