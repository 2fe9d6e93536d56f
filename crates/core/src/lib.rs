//! Runwise Core - deterministic forecast engine for subscription businesses.
//!
//! Given a scenario of business drivers and a set of starting conditions,
//! the engine produces a month-by-month financial trajectory (recurring
//! revenue, costs, profitability, cash position). It is pure and stateless:
//! no I/O, no shared state, and identical inputs always reproduce an
//! identical record series. Rendering and export live in sibling crates.

pub mod constants;
pub mod errors;
pub mod forecast;
pub mod scenario;

// Re-export the engine surface at the crate root
pub use forecast::*;
pub use scenario::*;

pub use constants::FORECAST_COLUMNS;
pub use errors::Error;
pub use errors::Result;
