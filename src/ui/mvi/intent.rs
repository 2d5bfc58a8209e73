//! Base trait for intents (user/host actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (toggling an option, moving the cursor)
/// - Host events (opening the sheet with fresh options)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
