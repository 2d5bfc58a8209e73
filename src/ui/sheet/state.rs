use crate::ui::mvi::UiState;
use crate::ui::panel::PanelState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SheetState {
    #[default]
    Hidden,
    Visible {
        /// The staged panel. Built fresh on every open and discarded on
        /// close; nothing survives across sheet lifetimes.
        panel: PanelState,
    },
}

impl UiState for SheetState {}

impl SheetState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn panel(&self) -> Option<&PanelState> {
        match self {
            Self::Visible { panel } => Some(panel),
            Self::Hidden => None,
        }
    }
}
