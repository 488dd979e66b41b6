//! # Energizame
//!
//! Register or remove a phone alert tied to a national ID, sent a chosen
//! number of minutes before a scheduled power outage.
//!
//! ## Usage
//!
//! ```bash
//! energizame add --cedula 1234567890 --telefono 0987654321 --tiempo 15
//! energizame remove --cedula 1234567890 --telefono 0987654321
//! ```
//!
//! ## Modules
//!
//! - `subscription` - Form types, validation, lead times and outcome classification
//! - `controller` - Submission state machine with the busy flag
//! - `api` - Transport to the remote notification service (HTTP and mock)
//! - `notify` - Display collaborator receiving one notice per outcome
//! - `config` - Layered configuration (defaults, TOML file, environment)
//! - `cli` - Command-line front end
pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod subscription;

pub use controller::SubmissionController;
pub use error::{Error, Result};
pub use subscription::{SubmissionMode, SubmissionOutcome, SubscriptionForm, SubscriptionRequest};
