//! Sensor domain types shared by the store, the sync controller and the view.
//!
//! `Sensor` is the server-owned record as fetched; `FormDraft` is free-text
//! user input that only becomes a `NewSensor` after validation.

mod draft;
mod filter;
mod model;

pub use draft::{FormDraft, FormField, NewSensor, ValidationError};
pub use filter::Filter;
pub use model::{Sensor, SensorId, SensorKind};
