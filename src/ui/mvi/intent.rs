//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents carry key presses from the dialog and outcomes of the search
/// worker. Reducers turn them into new states.
pub trait Intent: Send + 'static {}
