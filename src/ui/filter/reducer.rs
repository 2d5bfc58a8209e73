use crate::ui::filter::intent::FilterIntent;
use crate::ui::filter::state::{FilterSelection, PriceRange};
use crate::ui::mvi::Reducer;

pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterSelection;
    type Intent = FilterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterIntent::ToggleCategory { label } => {
                let mut next = state;
                toggle(&mut next.categories, label);
                next
            }
            FilterIntent::ToggleSize { label } => {
                let mut next = state;
                toggle(&mut next.sizes, label);
                next
            }
            FilterIntent::ToggleColor { name } => {
                let mut next = state;
                toggle(&mut next.colors, name);
                next
            }
            FilterIntent::SetRating { stars } => match stars {
                // Out-of-range values are dropped rather than stored.
                Some(n) if !(1..=5).contains(&n) => state,
                _ => FilterSelection {
                    rating_min: stars,
                    ..state
                },
            },
            FilterIntent::SetPriceMax { value } => {
                let max = value.clamp(0, i64::from(state.price_ceiling)) as u32;
                FilterSelection {
                    price: PriceRange {
                        min: state.price.min,
                        max,
                    },
                    ..state
                }
            }
            FilterIntent::ClearAll => FilterSelection::new(state.price_ceiling),
        }
    }
}

/// Insertion-ordered set toggle: a present label is removed, an absent
/// one is appended at the end.
fn toggle(labels: &mut Vec<String>, label: String) {
    match labels.iter().position(|existing| *existing == label) {
        Some(index) => {
            labels.remove(index);
        }
        None => labels.push(label),
    }
}
