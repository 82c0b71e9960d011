/// Marker trait for intent objects.
///
/// Intents carry the payload of one mutation: a fresh collection from the
/// server, a form keystroke, a filter change.
pub trait Intent: Send + 'static {}
