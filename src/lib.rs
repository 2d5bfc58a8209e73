//! Terminal storefront with a faceted filter panel.
//!
//! The filter model is shared between two surfaces: a persistent sidebar
//! for wide terminals and a bottom sheet for narrow ones. State changes
//! flow through reducers (see [`ui::mvi`]); the host app in [`ui::app`]
//! owns both instances and reports selection changes through its hooks.

pub mod catalog;
pub mod config;
pub mod ui;
