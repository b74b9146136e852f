//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either a user action on one of the page controls
/// (category, search, add-to-basket) or a system event such as the
/// product fetch completing.
pub trait Intent: Send + 'static {}
