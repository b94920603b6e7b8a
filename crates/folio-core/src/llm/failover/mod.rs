//! Provider failover
//!
//! A single [`FailoverController`] owns the fallback chain and the revert
//! timer. Capacity failures move the chain forward one step and retry once;
//! the original provider is restored lazily on the first call after the
//! cooldown, or on demand through [`FailoverController::force_revert`].

mod builder;
mod controller;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::{DEFAULT_MAX_HISTORY, FailoverControllerBuilder};
pub use controller::FailoverController;
pub use types::{AskError, StatusSnapshot, SwitchEvent, SwitchReason};
