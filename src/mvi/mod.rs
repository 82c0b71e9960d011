//! Model-View-Intent (MVI) primitives.
//!
//! The dashboard store is built on unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: cloneable snapshot of everything the view needs
//! - **Intent**: a named mutation (slice replacement, field edit)
//! - **Reducer**: pure function that folds an intent into a new state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
