//! Base trait for UI state.

/// Marker trait for state objects.
///
/// `Default` is the initial state, which lets the owner move the state
/// out with `std::mem::take` before reducing it.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
