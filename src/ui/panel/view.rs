//! Row rendering shared by the sidebar and the bottom sheet.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::config::ColorOption;
use crate::ui::filter::FilterSelection;
use crate::ui::panel::rows::{build_rows, PanelRow, RATING_THRESHOLDS};
use crate::ui::panel::state::PanelState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_ACCENT, HEADER_TEXT, RATING_STAR, SELECTED_TEXT, TEXT_MUTED,
};

/// Track cells of the price slider.
const PRICE_TRACK_WIDTH: usize = 16;

/// Build the panel body, one `Line` per display row.
///
/// `focused` decides whether the cursor row is highlighted; an unfocused
/// surface (the sidebar while the product pane has focus) renders its
/// selections without a cursor.
pub fn panel_lines(state: &PanelState, focused: bool) -> Vec<Line<'static>> {
    let rows = build_rows(&state.options);
    let cursor_row = if focused {
        rows.get(state.cursor).copied()
    } else {
        None
    };

    let mut lines = Vec::new();

    lines.push(section_line("Category"));
    for (index, label) in state.options.categories.iter().enumerate() {
        let checked = state.selection.categories.iter().any(|c| c == label);
        lines.push(checkbox_line(
            label,
            checked,
            cursor_row == Some(PanelRow::Category(index)),
        ));
    }
    lines.push(Line::from(""));

    lines.push(section_line("Price Range"));
    lines.push(price_track_line(
        &state.selection,
        cursor_row == Some(PanelRow::PriceMax),
    ));
    lines.push(price_labels_line(&state.selection));
    lines.push(Line::from(""));

    lines.push(section_line("Size"));
    lines.push(size_tokens_line(state, cursor_row));
    lines.push(Line::from(""));

    lines.push(section_line("Color"));
    for (index, color) in state.options.colors.iter().enumerate() {
        let selected = state.selection.colors.iter().any(|c| c == &color.name);
        lines.push(color_line(
            color,
            selected,
            cursor_row == Some(PanelRow::Color(index)),
        ));
    }
    lines.push(Line::from(""));

    lines.push(section_line("Rating"));
    for stars in RATING_THRESHOLDS {
        lines.push(rating_line(
            stars,
            state.selection.rating_min == Some(stars),
            cursor_row == Some(PanelRow::Rating(stars)),
        ));
    }

    lines
}

/// Display line of the cursor row within the [`panel_lines`] output.
///
/// Both surfaces use this to keep the cursor visible when the body is
/// taller than its viewport. All size rows map to the one shared
/// token line.
pub fn cursor_line_index(state: &PanelState) -> usize {
    let rows = build_rows(&state.options);
    let categories = state.options.categories.len();
    let colors = state.options.colors.len();
    match rows.get(state.cursor).copied() {
        Some(PanelRow::Category(index)) => 1 + index,
        Some(PanelRow::PriceMax) => categories + 3,
        Some(PanelRow::Size(_)) => categories + 7,
        Some(PanelRow::Color(index)) => categories + 10 + index,
        Some(PanelRow::Rating(stars)) => {
            let position = RATING_THRESHOLDS
                .iter()
                .position(|s| *s == stars)
                .unwrap_or(0);
            categories + 12 + colors + position
        }
        None => 0,
    }
}

/// Scroll the panel body just enough to keep the cursor row in view.
///
/// Returns the `Paragraph::scroll` offset for a body of `total` lines in
/// a viewport of `visible` rows.
pub fn scroll_offset(cursor_line: usize, total: usize, visible: usize) -> u16 {
    if visible == 0 || total <= visible {
        return 0;
    }
    let max_offset = total - visible;
    let offset = cursor_line.saturating_sub(visible.saturating_sub(2));
    offset.min(max_offset) as u16
}

fn section_line(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn checkbox_line(label: &str, checked: bool, focused: bool) -> Line<'static> {
    let marker_style = if checked {
        Style::default().fg(BRAND_ACCENT)
    } else {
        Style::default().fg(TEXT_MUTED)
    };
    let marker = if checked { "[x]" } else { "[ ]" };

    let mut line = Line::from(vec![
        Span::styled(format!(" {marker} "), marker_style),
        Span::styled(label.to_string(), Style::default().fg(HEADER_TEXT)),
    ]);
    if focused {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}

fn price_track_line(selection: &FilterSelection, focused: bool) -> Line<'static> {
    let ceiling = u64::from(selection.price_ceiling.max(1));
    let filled = (u64::from(selection.price.max) * PRICE_TRACK_WIDTH as u64 / ceiling) as usize;
    let filled = filled.min(PRICE_TRACK_WIDTH);

    let track_style = if focused {
        Style::default().fg(BRAND_ACCENT)
    } else {
        Style::default().fg(TEXT_MUTED)
    };

    let mut line = Line::from(vec![
        Span::raw(" "),
        Span::styled("━".repeat(filled), track_style),
        Span::styled("●", Style::default().fg(BRAND_ACCENT)),
        Span::styled("─".repeat(PRICE_TRACK_WIDTH - filled), track_style),
    ]);
    if focused {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}

fn price_labels_line(selection: &FilterSelection) -> Line<'static> {
    let left = format!(" ${}", selection.price.min);
    let right = format!("${}", selection.price.max);
    let total = PRICE_TRACK_WIDTH + 2;
    let pad = total.saturating_sub(left.len() + right.len()).max(1);

    Line::from(vec![
        Span::styled(left, Style::default().fg(TEXT_MUTED)),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(HEADER_TEXT)),
    ])
}

fn size_tokens_line(state: &PanelState, cursor_row: Option<PanelRow>) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (index, size) in state.options.sizes.iter().enumerate() {
        let selected = state.selection.sizes.iter().any(|s| s == size);
        let mut style = if selected {
            Style::default().fg(SELECTED_TEXT).bg(BRAND_ACCENT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        if cursor_row == Some(PanelRow::Size(index)) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("[{size}]"), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn color_line(color: &ColorOption, selected: bool, focused: bool) -> Line<'static> {
    let dot_style = match color.rgb() {
        Some((r, g, b)) => Style::default().fg(Color::Rgb(r, g, b)),
        None => Style::default().fg(TEXT_MUTED),
    };
    let marker_style = if selected {
        Style::default().fg(BRAND_ACCENT)
    } else {
        Style::default().fg(TEXT_MUTED)
    };
    let marker = if selected { "[x]" } else { "[ ]" };

    let mut line = Line::from(vec![
        Span::styled(format!(" {marker} "), marker_style),
        Span::styled("● ", dot_style),
        Span::styled(color.name.clone(), Style::default().fg(HEADER_TEXT)),
    ]);
    if focused {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}

fn rating_line(stars: u8, selected: bool, focused: bool) -> Line<'static> {
    let marker = if selected { "(•)" } else { "( )" };
    let marker_style = if selected {
        Style::default().fg(BRAND_ACCENT)
    } else {
        Style::default().fg(TEXT_MUTED)
    };
    let filled = usize::from(stars);

    let mut line = Line::from(vec![
        Span::styled(format!(" {marker} "), marker_style),
        Span::styled("★".repeat(filled), Style::default().fg(RATING_STAR)),
        Span::styled("★".repeat(5 - filled), Style::default().fg(TEXT_MUTED)),
        Span::styled(" & Up", Style::default().fg(TEXT_MUTED)),
    ]);
    if focused {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}
