use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return the centered [`consts::DISPLAY_SIZE`] rectangle in which everything
/// is drawn.
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Center a `size` rectangle inside `area`, clamping to `area` if it does not
/// fit.  Excess space is split evenly, with any odd cell going to the
/// right/bottom.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Return the one-cell-high row of `display` at `offset` rows from its top
pub(crate) fn row(display: Rect, offset: u16) -> Rect {
    Rect {
        y: display.y.saturating_add(offset),
        height: 1,
        ..display
    }
}
