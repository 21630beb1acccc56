//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state holds everything its view renders. `Default` is the hidden
/// state, so the app can `mem::take` it while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
