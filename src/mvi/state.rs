/// Marker trait for state snapshots.
///
/// Snapshots are handed out by value to readers, so they must be `Clone`;
/// `Default` is the mount-time state and `PartialEq` lets tests and
/// subscribers compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
