use crate::ui::filter::{FilterIntent, FilterReducer};
use crate::ui::mvi::Reducer;
use crate::ui::panel::intent::PanelIntent;
use crate::ui::panel::rows::{build_rows, PanelRow};
use crate::ui::panel::state::PanelState;

pub struct PanelReducer;

impl Reducer for PanelReducer {
    type State = PanelState;
    type Intent = PanelIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PanelIntent::MoveUp => {
                let rows = build_rows(&state.options);
                let cursor = if state.cursor == 0 {
                    rows.len().saturating_sub(1)
                } else {
                    state.cursor - 1
                };
                PanelState { cursor, ..state }
            }
            PanelIntent::MoveDown => {
                let rows = build_rows(&state.options);
                let cursor = if state.cursor + 1 >= rows.len() {
                    0
                } else {
                    state.cursor + 1
                };
                PanelState { cursor, ..state }
            }
            PanelIntent::Activate => {
                let rows = build_rows(&state.options);
                match rows.get(state.cursor).copied() {
                    Some(row) => match activation_intent(&state, row) {
                        Some(filter_intent) => apply(state, filter_intent),
                        None => state,
                    },
                    None => state,
                }
            }
            PanelIntent::AdjustPrice { delta } => {
                let rows = build_rows(&state.options);
                match rows.get(state.cursor) {
                    Some(PanelRow::PriceMax) => {
                        let value = i64::from(state.selection.price.max).saturating_add(delta);
                        apply(state, FilterIntent::SetPriceMax { value })
                    }
                    _ => state,
                }
            }
            PanelIntent::SetPriceMax { value } => apply(state, FilterIntent::SetPriceMax { value }),
            PanelIntent::ClearAll => apply(state, FilterIntent::ClearAll),
        }
    }
}

/// Maps the focused row onto the model operation it triggers. The price
/// row has no activation; it is driven by `AdjustPrice`.
fn activation_intent(state: &PanelState, row: PanelRow) -> Option<FilterIntent> {
    match row {
        PanelRow::Category(index) => state
            .options
            .categories
            .get(index)
            .map(|label| FilterIntent::ToggleCategory {
                label: label.clone(),
            }),
        PanelRow::Size(index) => state
            .options
            .sizes
            .get(index)
            .map(|label| FilterIntent::ToggleSize {
                label: label.clone(),
            }),
        PanelRow::Color(index) => state
            .options
            .colors
            .get(index)
            .map(|color| FilterIntent::ToggleColor {
                name: color.name.clone(),
            }),
        PanelRow::Rating(stars) => Some(FilterIntent::SetRating { stars: Some(stars) }),
        PanelRow::PriceMax => None,
    }
}

fn apply(state: PanelState, intent: FilterIntent) -> PanelState {
    let PanelState {
        options,
        selection,
        cursor,
    } = state;
    PanelState {
        options,
        selection: FilterReducer::reduce(selection, intent),
        cursor,
    }
}
