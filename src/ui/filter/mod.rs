//! The selection model shared by both filter surfaces.
//!
//! `FilterSelection` holds one instance's in-progress choices (category,
//! size and color sets, rating floor, price cap) and `FilterReducer`
//! applies every mutation. The sidebar and the bottom sheet both reduce
//! through this module; neither carries selection logic of its own.

mod intent;
mod reducer;
mod state;

pub use intent::FilterIntent;
pub use reducer::FilterReducer;
pub use state::{FilterSelection, PriceRange, DEFAULT_PRICE_CEILING};
