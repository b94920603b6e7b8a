//! HTTP API for the portfolio assistant
//!
//! Every generation endpoint goes through the shared [`FailoverController`]
//! held in [`AppState`]. Request-level failures are reported with HTTP 200 and
//! `success: false`; HTTP 500 is reserved for a missing controller.
//!
//! [`FailoverController`]: folio_core::llm::FailoverController

mod handlers;
mod page;
mod routes;
mod state;
mod types;


pub use routes::create_router;
pub use state::AppState;
