//! The shared filter panel behind both surfaces.
//!
//! The sidebar and the bottom sheet each instantiate `PanelState` and
//! reduce it with `PanelReducer`; they differ only in chrome and
//! lifecycle. Selection semantics stay in [`crate::ui::filter`]; this
//! layer adds the focus cursor and the row rendering.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Options + selection + cursor
//! - `intent.rs` - Navigation and activation
//! - `reducer.rs` - Cursor movement, delegation to the selection model
//! - `rows.rs` - Flat focus order over the configured options
//! - `view.rs` - Shared row rendering

mod intent;
mod reducer;
mod rows;
mod state;
mod view;

pub use intent::PanelIntent;
pub use reducer::PanelReducer;
pub use rows::{build_rows, PanelRow, RATING_THRESHOLDS};
pub use state::PanelState;
pub use view::{cursor_line_index, panel_lines, scroll_offset};
