//! Bottom-sheet filter surface for narrow viewports.
//!
//! The sheet stages a fresh [`crate::ui::panel::PanelState`] on every
//! open and discards it on close; selections never leak between opens
//! or into the sidebar instance.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::{SheetCloseReason, SheetIntent};
pub use reducer::SheetReducer;
pub use state::SheetState;
pub use view::render_sheet;
