//! Remote-data lifecycle: load, create and delete against the sensor API.
//!
//! Every write is followed by a full reload; the store never patches the
//! collection locally. See [`SyncController`] for the ordering rules that
//! apply when loads overlap.

mod controller;
mod error;

pub use controller::{LoadOutcome, SyncController, LOAD_ERROR_MESSAGE};
pub use error::ActionError;
