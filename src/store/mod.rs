//! Dashboard state store.
//!
//! A single owned [`Store`] holds every mutable slice of the dashboard. All
//! mutation goes through [`StoreIntent`]s folded by [`StoreReducer`];
//! subscribers are called synchronously after each one.

mod handle;
mod intent;
mod reducer;
mod state;

pub use handle::{Store, Subscription};
pub use intent::StoreIntent;
pub use reducer::StoreReducer;
pub use state::{DashboardState, SyncState};
