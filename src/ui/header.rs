use crate::ui::app::PanelSource;
use crate::ui::filter::FilterSelection;
use crate::ui::theme::{BRAND_ACCENT, GLOBAL_BORDER, HEADER_TEXT, TEXT_MUTED};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// One-line status bar: brand name plus whatever the host was last
    /// told about the filter selection.
    pub fn widget(&self, notified: Option<&(PanelSource, FilterSelection)>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(TEXT_MUTED);
        let brand_style = Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Storefront", brand_style),
            Span::styled("  │  ", separator_style),
        ];
        match notified {
            Some((source, selection)) => {
                spans.push(Span::styled(summary(selection), text_style));
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(source_label(*source), separator_style));
            }
            None => {
                spans.push(Span::styled("no filters applied", separator_style));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn summary(selection: &FilterSelection) -> String {
    if selection.is_empty() {
        return "no active filters".to_string();
    }
    let mut parts = Vec::new();
    let labels =
        selection.categories.len() + selection.sizes.len() + selection.colors.len();
    if labels > 0 {
        let plural = if labels == 1 { "" } else { "s" };
        parts.push(format!("{labels} option{plural}"));
    }
    if selection.price.min > 0 || selection.price.max < selection.price_ceiling {
        parts.push(format!("≤ ${}", selection.price.max));
    }
    if let Some(stars) = selection.rating_min {
        parts.push(format!("{stars}★ & up"));
    }
    parts.join(" · ")
}

fn source_label(source: PanelSource) -> &'static str {
    match source {
        PanelSource::Sidebar => "via sidebar",
        PanelSource::Sheet => "via sheet",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::filter::{FilterIntent, FilterReducer};
    use crate::ui::mvi::Reducer;

    #[test]
    fn summary_of_empty_selection_says_so() {
        assert_eq!(summary(&FilterSelection::new(1000)), "no active filters");
    }

    #[test]
    fn summary_lists_labels_price_and_rating() {
        let mut selection = FilterSelection::new(1000);
        for intent in [
            FilterIntent::ToggleSize {
                label: "M".to_string(),
            },
            FilterIntent::ToggleColor {
                name: "Black".to_string(),
            },
            FilterIntent::SetRating { stars: Some(4) },
            FilterIntent::SetPriceMax { value: 250 },
        ] {
            selection = FilterReducer::reduce(selection, intent);
        }
        assert_eq!(summary(&selection), "2 options · ≤ $250 · 4★ & up");
    }
}
