//! SensorFlow dashboard.
//!
//! Lists, creates and deletes sensor records held by a remote JSON API and
//! renders them in a terminal UI with client-side filtering.
//!
//! ```text
//! ui ──→ dashboard ──→ sync ──→ store ──→ (subscribers) ──→ ui
//!                        │                    │
//!                        └──→ api            view
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod mvi;
pub mod sensor;
pub mod store;
pub mod sync;
pub mod ui;
pub mod view;
