use crate::config::FilterOptions;

/// Rating floors offered by the panel, in display order.
pub const RATING_THRESHOLDS: [u8; 4] = [4, 3, 2, 1];

/// One focusable row of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRow {
    /// Category checkbox at this index of the configured list.
    Category(usize),
    /// The price slider.
    PriceMax,
    /// Size button at this index of the configured list.
    Size(usize),
    /// Color swatch at this index of the configured list.
    Color(usize),
    /// Rating radio for "this many stars and up".
    Rating(u8),
}

/// Flat focus order over the configured options: categories, price,
/// sizes, colors, ratings. Matches the section order both surfaces
/// render.
pub fn build_rows(options: &FilterOptions) -> Vec<PanelRow> {
    let mut rows = Vec::with_capacity(
        options.categories.len()
            + 1
            + options.sizes.len()
            + options.colors.len()
            + RATING_THRESHOLDS.len(),
    );
    rows.extend((0..options.categories.len()).map(PanelRow::Category));
    rows.push(PanelRow::PriceMax);
    rows.extend((0..options.sizes.len()).map(PanelRow::Size));
    rows.extend((0..options.colors.len()).map(PanelRow::Color));
    rows.extend(RATING_THRESHOLDS.into_iter().map(PanelRow::Rating));
    rows
}
