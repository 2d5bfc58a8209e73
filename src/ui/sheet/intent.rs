use crate::config::FilterOptions;
use crate::ui::mvi::Intent;
use crate::ui::panel::PanelIntent;

/// Why the sheet went away. Delivered to the host's close hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetCloseReason {
    /// Click on the dimmed area outside the sheet.
    Backdrop,
    /// The ✕ button (Escape or `x`).
    CloseButton,
    /// The footer "Clear All" action.
    ClearAll,
    /// The footer "Apply Filters" action.
    Apply,
}

#[derive(Debug, Clone)]
pub enum SheetIntent {
    /// Open with a fresh panel over the given options. Nothing carries
    /// over from any previous open.
    Open { options: FilterOptions },
    /// Forward a panel intent to the staged panel. No-op while hidden.
    Panel { intent: PanelIntent },
    /// The footer "Apply Filters" action: the staged selection becomes
    /// the host's active one (via the change hook) and the sheet closes.
    Apply,
    /// The footer "Clear All" action: reset the staged selection, then
    /// close.
    ClearAll,
    /// Backdrop click or the ✕ button.
    Dismiss { reason: SheetCloseReason },
}

impl Intent for SheetIntent {}
