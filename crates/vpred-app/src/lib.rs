//! Prediction form controller and terminal front end.
//!
//! The controller owns the form state, the last verdict and the in-flight
//! flag. Network access and user notifications are injected so the same
//! controller drives the `vpred` binary and the tests.

pub mod cli;
pub mod controller;
pub mod logging;
pub mod notifier;
pub mod session;
pub mod view;

pub use controller::{FormController, SubmitOutcome, API_ERROR_MESSAGE};
pub use notifier::{ConsoleNotifier, Notifier};
