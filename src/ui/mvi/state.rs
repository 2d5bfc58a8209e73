//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything the view needs to render)
/// - Comparable (PartialEq so dispatch sites can detect real changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
