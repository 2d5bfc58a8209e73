use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal width below which the host drops the sidebar and offers the
/// bottom sheet instead (the `--panel auto` breakpoint).
pub const SHEET_BREAKPOINT_COLS: u16 = 90;

/// Width of the sidebar column, borders included.
const SIDEBAR_WIDTH: u16 = 34;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the product pane and the sidebar column.
pub fn body_columns(area: Rect) -> (Rect, Rect) {
    let sidebar_width = SIDEBAR_WIDTH.min(area.width / 2);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(sidebar_width)])
        .split(area);
    (columns[0], columns[1])
}

/// Bottom-anchored overlay area for the sheet: full width, four fifths
/// of the height. Everything above it is the backdrop.
pub fn sheet_rect(area: Rect) -> Rect {
    let height = area.height.saturating_mul(4) / 5;
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height),
        width: area.width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_full_area() {
        let area = Rect::new(0, 0, 120, 40);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, area.height);
        assert_eq!(body.y, header.height);
        assert_eq!(footer.y, area.height - footer.height);
    }

    #[test]
    fn sheet_hugs_the_bottom_edge() {
        let area = Rect::new(0, 0, 80, 30);
        let sheet = sheet_rect(area);
        assert_eq!(sheet.width, area.width);
        assert_eq!(sheet.y + sheet.height, area.height);
        assert_eq!(sheet.height, 24);
    }

    #[test]
    fn sidebar_never_takes_more_than_half_the_body() {
        let (products, sidebar) = body_columns(Rect::new(0, 3, 40, 20));
        assert_eq!(sidebar.width, 20);
        assert_eq!(products.width + sidebar.width, 40);

        let (_, wide) = body_columns(Rect::new(0, 3, 120, 20));
        assert_eq!(wide.width, SIDEBAR_WIDTH);
    }
}
