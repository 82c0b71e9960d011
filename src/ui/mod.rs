//! Terminal render layer.
//!
//! Reads [`DashboardView`](crate::dashboard::DashboardView) snapshots and
//! turns key presses into dashboard intents. Holds no sensor data of its own.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
