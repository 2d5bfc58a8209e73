use crate::ui::mvi::Reducer;
use crate::ui::panel::{PanelReducer, PanelState};
use crate::ui::sheet::intent::SheetIntent;
use crate::ui::sheet::state::SheetState;

pub struct SheetReducer;

impl Reducer for SheetReducer {
    type State = SheetState;
    type Intent = SheetIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SheetIntent::Open { options } => SheetState::Visible {
                panel: PanelState::new(options),
            },
            SheetIntent::Panel { intent } => match state {
                SheetState::Visible { panel } => SheetState::Visible {
                    panel: PanelReducer::reduce(panel, intent),
                },
                hidden => hidden,
            },
            // All three end the sheet's lifetime; the staged panel is
            // discarded with it. Hooks fire at the dispatch site before
            // this runs.
            SheetIntent::Apply | SheetIntent::ClearAll | SheetIntent::Dismiss { .. } => {
                SheetState::Hidden
            }
        }
    }
}
