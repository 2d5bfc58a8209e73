use crate::config::FilterOptions;
use crate::ui::filter::FilterSelection;
use crate::ui::mvi::UiState;

/// What one filter surface holds: the configured options, this
/// instance's selections, and a cursor over the flat row list.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub options: FilterOptions,
    pub selection: FilterSelection,
    pub cursor: usize,
}

impl PanelState {
    /// Fresh panel over the given options with an empty selection.
    pub fn new(options: FilterOptions) -> Self {
        let selection = FilterSelection::new(options.price_ceiling);
        Self {
            options,
            selection,
            cursor: 0,
        }
    }
}

// Manual Default so the selection's price ceiling always comes from the
// options rather than the two drifting apart.
impl Default for PanelState {
    fn default() -> Self {
        Self::new(FilterOptions::default())
    }
}

impl UiState for PanelState {}
