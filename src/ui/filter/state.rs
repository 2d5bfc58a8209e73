use crate::ui::mvi::UiState;

/// Stock ceiling of the price slider, in whole currency units.
pub const DEFAULT_PRICE_CEILING: u32 = 1000;

/// Inclusive price bounds, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

/// One panel instance's in-progress selections.
///
/// The label lists are sets with preserved insertion order: toggling a
/// present label removes it, toggling an absent one appends it. Every
/// rendered panel owns an independent value; the sidebar and the bottom
/// sheet never share one.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub categories: Vec<String>,
    pub sizes: Vec<String>,
    /// Selected color names; swatches are display-only and live in the
    /// configured options.
    pub colors: Vec<String>,
    /// Minimum star rating ("N stars and up"), 1..=5.
    pub rating_min: Option<u8>,
    pub price: PriceRange,
    /// Bound `price.max` clamps against. Fixed for the instance lifetime.
    pub price_ceiling: u32,
}

impl FilterSelection {
    /// An empty selection over the given price domain.
    pub fn new(price_ceiling: u32) -> Self {
        Self {
            categories: Vec::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            rating_min: None,
            price: PriceRange {
                min: 0,
                max: price_ceiling,
            },
            price_ceiling,
        }
    }

    /// True when nothing deviates from the initial state.
    pub fn is_empty(&self) -> bool {
        *self == Self::new(self.price_ceiling)
    }

    /// How many filters are active, the way a "Filters (3)" badge counts:
    /// one per selected label, one for a rating floor, one for a narrowed
    /// price range.
    pub fn active_count(&self) -> usize {
        let mut count = self.categories.len() + self.sizes.len() + self.colors.len();
        if self.rating_min.is_some() {
            count += 1;
        }
        if self.price.min > 0 || self.price.max < self.price_ceiling {
            count += 1;
        }
        count
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_CEILING)
    }
}

impl UiState for FilterSelection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_selection_is_empty() {
        let selection = FilterSelection::new(500);
        assert!(selection.is_empty());
        assert_eq!(selection.active_count(), 0);
        assert_eq!(selection.price.min, 0);
        assert_eq!(selection.price.max, 500);
    }

    #[test]
    fn active_count_tallies_labels_rating_and_price() {
        let mut selection = FilterSelection::default();
        selection.sizes.push("M".to_string());
        selection.colors.push("Black".to_string());
        selection.rating_min = Some(4);
        selection.price.max = 250;

        assert_eq!(selection.active_count(), 4);
        assert!(!selection.is_empty());
    }

    #[test]
    fn full_price_range_does_not_count_as_a_filter() {
        let mut selection = FilterSelection::default();
        selection.price.max = DEFAULT_PRICE_CEILING;
        assert_eq!(selection.active_count(), 0);
    }
}
