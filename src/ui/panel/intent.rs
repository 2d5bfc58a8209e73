use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PanelIntent {
    /// Move the cursor up one row, wrapping at the top.
    MoveUp,
    /// Move the cursor down one row, wrapping at the bottom.
    MoveDown,
    /// Toggle or select whatever the cursor is on. No-op on the price row.
    Activate,
    /// Nudge the price cap by a signed amount. Only acts while the cursor
    /// is on the price row.
    AdjustPrice { delta: i64 },
    /// Set the price cap directly, regardless of cursor position.
    SetPriceMax { value: i64 },
    /// Reset the selection. The cursor stays put.
    ClearAll,
}

impl Intent for PanelIntent {}
