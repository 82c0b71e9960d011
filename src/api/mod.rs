//! HTTP client for the sensor REST API.
//!
//! | Operation | Method | Path                 |
//! |-----------|--------|----------------------|
//! | list      | GET    | `/api/sensores`      |
//! | create    | POST   | `/api/sensores`      |
//! | delete    | DELETE | `/api/sensores/{id}` |

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
