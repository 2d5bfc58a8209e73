//! Overlay rendering for the bottom sheet.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::sheet_rect;
use crate::ui::panel::{cursor_line_index, panel_lines, scroll_offset};
use crate::ui::sheet::state::SheetState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_ACCENT, HEADER_TEXT, POPUP_BORDER, SELECTED_TEXT, TEXT_MUTED,
};

/// Render the bottom sheet overlay. Nothing is drawn while hidden.
pub fn render_sheet(frame: &mut Frame, state: &SheetState) {
    let Some(panel) = state.panel() else {
        return;
    };

    let area = sheet_rect(frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Filters ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let lines = panel_lines(panel, true);
    let offset = scroll_offset(
        cursor_line_index(panel),
        lines.len(),
        regions[0].height as usize,
    );
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), regions[0]);
    frame.render_widget(footer_widget(), regions[1]);
}

fn footer_widget() -> Paragraph<'static> {
    let buttons = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            " Clear All (c) ",
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT),
        ),
        Span::raw("  "),
        Span::styled(
            " Apply Filters (a) ",
            Style::default()
                .fg(SELECTED_TEXT)
                .bg(BRAND_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let hints = Line::from(Span::styled(
        " ↑↓ move · Space toggle · ←→ price · Esc close",
        Style::default().fg(TEXT_MUTED),
    ));
    Paragraph::new(vec![buttons, hints])
}
