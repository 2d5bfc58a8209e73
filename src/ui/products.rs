//! The product pane the filter surfaces sit beside.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::catalog::Product;
use crate::ui::theme::{BRAND_ACCENT, GLOBAL_BORDER, HEADER_TEXT, RATING_STAR, TEXT_MUTED};

/// Render the product list with a line-based scroll offset.
///
/// The list is never filtered here; it shows the full demo catalog no
/// matter what is selected.
pub fn render_products(
    frame: &mut Frame,
    area: Rect,
    products: &[Product],
    scroll: usize,
    focused: bool,
) {
    let border = if focused { BRAND_ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(format!(" Products ({}) ", products.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for product in products.iter().skip(scroll) {
        lines.push(Line::from(Span::styled(
            format!(" {}", product.name),
            Style::default().fg(HEADER_TEXT),
        )));

        let mut detail = vec![
            Span::styled(
                format!("   {} · {} · ", product.brand, product.category),
                Style::default().fg(TEXT_MUTED),
            ),
            Span::styled(product.price_label(), Style::default().fg(HEADER_TEXT)),
        ];
        match product.rating_tenths {
            Some(tenths) => detail.push(Span::styled(
                format!(" · {}.{}★", tenths / 10, tenths % 10),
                Style::default().fg(RATING_STAR),
            )),
            None => detail.push(Span::styled(
                " · unrated",
                Style::default().fg(TEXT_MUTED),
            )),
        }
        lines.push(Line::from(detail));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
