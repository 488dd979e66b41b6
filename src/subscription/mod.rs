//! Subscription domain types
//!
//! - `SubscriptionForm` - raw, unvalidated input as typed by the user
//! - `SubscriptionRequest` - the validated payload sent to the remote service
//! - `SubmissionMode` - whether the subscription is being added or removed
//! - `SubmissionOutcome` - classified result of one submission attempt

pub mod lead_time;
pub mod outcome;
pub mod validation;

pub use lead_time::LeadTime;
pub use outcome::{classify, SubmissionOutcome};
pub use validation::{validate, ValidationError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which operation a submission performs against the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionMode {
    Create,
    Delete,
}

impl SubmissionMode {
    /// Path of the endpoint serving this mode, relative to the service root
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Self::Create => "energizame/agregar",
            Self::Delete => "energizame/eliminar",
        }
    }

    pub fn method(&self) -> reqwest::Method {
        match self {
            Self::Create => reqwest::Method::POST,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for SubmissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Form fields exactly as entered; nothing here has been checked yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubscriptionForm {
    pub cedula: String,
    pub telefono: String,
    #[serde(default)]
    pub tiempo_notificacion: Option<String>,
}

impl SubscriptionForm {
    pub fn new(cedula: impl Into<String>, telefono: impl Into<String>) -> Self {
        Self {
            cedula: cedula.into(),
            telefono: telefono.into(),
            tiempo_notificacion: None,
        }
    }

    pub fn with_lead_time(mut self, lead_time: impl Into<String>) -> Self {
        self.tiempo_notificacion = Some(lead_time.into());
        self
    }
}

/// A subscription payload that passed validation for its mode
///
/// The only way to obtain one is [`SubscriptionRequest::parse`], so a value of
/// this type is always safe to put on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionRequest {
    #[serde(rename = "cedula")]
    national_id: String,
    #[serde(rename = "telefono")]
    phone: String,
    #[serde(
        rename = "tiempo_notificacion",
        skip_serializing_if = "Option::is_none"
    )]
    notify_lead_time: Option<String>,
}

impl SubscriptionRequest {
    /// Validate `form` for `mode` and build the wire payload.
    ///
    /// In delete mode any lead time on the form is dropped.
    pub fn parse(form: SubscriptionForm, mode: SubmissionMode) -> Result<Self, ValidationError> {
        validate(&form, mode)?;
        let notify_lead_time = match mode {
            SubmissionMode::Create => form.tiempo_notificacion,
            SubmissionMode::Delete => None,
        };
        Ok(Self {
            national_id: form.cedula,
            phone: form.telefono,
            notify_lead_time,
        })
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn notify_lead_time(&self) -> Option<&str> {
        self.notify_lead_time.as_deref()
    }
}
