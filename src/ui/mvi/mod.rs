//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every filter surface in this crate (the selection model, the panel
//! controller, the bottom sheet) follows the same unidirectional flow.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of what the view renders
//! - **Intent**: User actions or host events
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
