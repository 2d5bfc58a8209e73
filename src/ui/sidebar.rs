//! Sidebar filter surface for wide viewports.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::panel::{cursor_line_index, panel_lines, scroll_offset, PanelState};
use crate::ui::theme::{BRAND_ACCENT, GLOBAL_BORDER, TEXT_MUTED};

/// Render the always-visible sidebar into its body column.
pub fn render_sidebar(frame: &mut Frame, area: Rect, panel: &PanelState, focused: bool) {
    let border = if focused { BRAND_ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = panel_lines(panel, focused);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " c clear all",
        Style::default().fg(TEXT_MUTED),
    )));

    let offset = if focused {
        scroll_offset(cursor_line_index(panel), lines.len(), inner.height as usize)
    } else {
        0
    };
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}
