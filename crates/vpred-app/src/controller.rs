//! Prediction form controller.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info, warn};
use vpred_client::PredictionClient;
use vpred_models::{FormField, ModelError, ModelResult, NumericPolicy, Verdict, VideoForm};

use crate::notifier::Notifier;

/// Generic message shown for every failed request.
pub const API_ERROR_MESSAGE: &str = "API error. Please try again later.";

const SUBMIT_LABEL: &str = "Predict Viral Potential";
const SUBMIT_LABEL_IN_FLIGHT: &str = "Predicting…";

/// Result of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint answered and the verdict was stored.
    Predicted(Verdict),
    /// Strict policy: a numeric field did not parse, nothing was sent.
    Rejected { field: FormField },
    /// The request failed; the previous verdict is untouched.
    Failed,
}

/// Clears the in-flight flag when dropped, including on cancellation.
struct InFlight(Arc<watch::Sender<bool>>);

impl InFlight {
    fn start(flag: &Arc<watch::Sender<bool>>) -> Self {
        flag.send_replace(true);
        Self(Arc::clone(flag))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

/// Holds the form fields, the last verdict and the in-flight flag.
pub struct FormController<C, N> {
    form: VideoForm,
    result: Option<Verdict>,
    in_flight: Arc<watch::Sender<bool>>,
    policy: NumericPolicy,
    client: C,
    notifier: N,
}

impl<C, N> FormController<C, N>
where
    C: PredictionClient,
    N: Notifier,
{
    /// Create a controller with an empty form and the lenient numeric policy.
    pub fn new(client: C, notifier: N) -> Self {
        let (in_flight, _) = watch::channel(false);
        Self {
            form: VideoForm::default(),
            result: None,
            in_flight: Arc::new(in_flight),
            policy: NumericPolicy::default(),
            client,
            notifier,
        }
    }

    pub fn with_policy(mut self, policy: NumericPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn form(&self) -> &VideoForm {
        &self.form
    }

    pub fn policy(&self) -> NumericPolicy {
        self.policy
    }

    /// Last successful verdict, if any.
    pub fn result(&self) -> Option<Verdict> {
        self.result
    }

    pub fn is_in_flight(&self) -> bool {
        *self.in_flight.borrow()
    }

    /// Watch the in-flight flag.
    pub fn subscribe_in_flight(&self) -> watch::Receiver<bool> {
        self.in_flight.subscribe()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_in_flight()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_in_flight() {
            SUBMIT_LABEL_IN_FLIGHT
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Update a field addressed by its wire name.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> ModelResult<FormField> {
        let field: FormField = name.parse()?;
        self.update_field(field, value);
        Ok(field)
    }

    /// Overwrite the form with the fixed example. Result and in-flight flag are untouched.
    pub fn prefill(&mut self) {
        self.form.prefill();
    }

    /// Send the current form to the prediction endpoint.
    ///
    /// Failures are reported through the notifier and never returned as
    /// errors. The previous verdict survives a failure.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let _in_flight = InFlight::start(&self.in_flight);

        let request = match self.form.to_request(self.policy) {
            Ok(request) => request,
            Err(ModelError::InvalidNumber { field, raw }) => {
                warn!(field = %field, raw = %raw, "Rejected non-numeric input");
                self.notifier.notify(&format!(
                    "Please enter a valid number for {}.",
                    field.spec().label
                ));
                return SubmitOutcome::Rejected { field };
            }
            Err(e) => {
                error!("Failed to build prediction request: {}", e);
                self.notifier.notify(API_ERROR_MESSAGE);
                return SubmitOutcome::Failed;
            }
        };

        match self.client.predict(&request).await {
            Ok(response) => {
                let verdict = response.verdict();
                info!(viral = response.viral, "Prediction received");
                self.result = Some(verdict);
                SubmitOutcome::Predicted(verdict)
            }
            Err(e) => {
                error!(kind = e.kind(), status = ?e.status(), "Prediction request failed: {}", e);
                self.notifier.notify(API_ERROR_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }
}
