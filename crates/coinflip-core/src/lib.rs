//! # coinflip-core - Core Domain Types
//!
//! Foundation crate for Coinflip. Provides the outcome model, the
//! statistics record, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Outcomes (`outcome`)
//! - [`Outcome`] - The three ways a coin can land (Heads, Tails, Edge)
//! - [`Outcome::from_draw()`] - Weighted outcome policy over a `[0, 1)` draw
//!
//! ### Statistics (`stats`)
//! - [`StatisticsRecord`] - Cumulative heads/tails/edge counters
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum for terminal/config/storage edges
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use coinflip_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod outcome;
pub mod stats;

/// Prelude for common imports used throughout all Coinflip crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use outcome::Outcome;
pub use stats::StatisticsRecord;
