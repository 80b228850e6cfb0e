use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::{CARD_HEIGHT, TOAST_HEIGHT, TOAST_MARGIN_BOTTOM};

/// Splits the screen into the page body (padded) and a one-line key hint.
pub fn page_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = area.height.min(1);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height - footer_height,
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height - footer_height,
    };
    (inset(body, 2, 1), footer)
}

/// Number of grid columns for a page body of `width` cells.
pub fn grid_columns(width: u16) -> u16 {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        _ => 3,
    }
}

/// Rect of the card in the first grid cell.
pub fn card_rect(body: Rect) -> Rect {
    let columns = grid_columns(body.width);
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..columns).map(|_| Constraint::Ratio(1, u32::from(columns))))
        .spacing(2)
        .split(body);
    let cell = cells[0];
    Rect {
        height: cell.height.min(CARD_HEIGHT),
        ..cell
    }
}

/// Centered rect for the dialog, clamped to the screen.
pub fn dialog_rect(area: Rect, min_width: u16, min_height: u16) -> Rect {
    let width = (area.width * 3 / 5).max(min_width).min(area.width);
    let height = (area.height * 3 / 5).max(min_height).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Bottom-centered rect for a toast holding `text_width` cells of content.
pub fn toast_rect(area: Rect, text_width: u16) -> Rect {
    let width = text_width.saturating_add(4).min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    let bottom_gap = TOAST_MARGIN_BOTTOM.min(area.height - height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height - height - bottom_gap,
        width,
        height,
    }
}

fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    let horizontal = horizontal.min(area.width / 2);
    let vertical = vertical.min(area.height / 2);
    Rect {
        x: area.x + horizontal,
        y: area.y + vertical,
        width: area.width - 2 * horizontal,
        height: area.height - 2 * vertical,
    }
}
