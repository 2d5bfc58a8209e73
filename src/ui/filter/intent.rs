use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FilterIntent {
    /// Toggle a category label in or out of the selection.
    ToggleCategory { label: String },
    /// Toggle a size label in or out of the selection.
    ToggleSize { label: String },
    /// Toggle a color by name (the swatch is display-only).
    ToggleColor { name: String },
    /// `Some(n)` selects the "n stars and up" floor, replacing any
    /// previous one; `None` clears it. Values outside 1..=5 are ignored.
    SetRating { stars: Option<u8> },
    /// Move the upper price bound; clamped into `[0, price_ceiling]`.
    /// The lower bound never moves.
    SetPriceMax { value: i64 },
    /// Reset to the initial empty selection.
    ClearAll,
}

impl Intent for FilterIntent {}
