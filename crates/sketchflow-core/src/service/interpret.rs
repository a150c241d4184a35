//! Interpretation pipeline: build prompt -> send -> interpret.
//!
//! Each call is independent; the only shared state is the read-only
//! gateway. The gateway call is the single suspension point, and dropping
//! the returned future drops the outbound request with it.

use tracing::{debug, info, warn};

use sketchflow_types::interpret::InterpretationOutcome;
use sketchflow_types::llm::GatewayError;

use crate::interpret::interpret;
use crate::llm::box_gateway::BoxModelGateway;
use crate::prompt;

/// Drives one natural-language message through the pipeline.
pub struct InterpretService {
    gateway: BoxModelGateway,
}

impl InterpretService {
    pub fn new(gateway: BoxModelGateway) -> Self {
        Self { gateway }
    }

    /// Access the underlying gateway.
    pub fn gateway(&self) -> &BoxModelGateway {
        &self.gateway
    }

    /// Run the pipeline for `message`.
    ///
    /// Returns `Err` only for gateway failures other than the recognized
    /// rate limit; malformed model output degrades to
    /// [`InterpretationOutcome::RawFallback`].
    pub async fn interpret(&self, message: &str) -> Result<InterpretationOutcome, GatewayError> {
        let prompt = prompt::build(message);
        debug!(
            gateway = self.gateway.name(),
            message_len = message.len(),
            "sending prompt"
        );

        let raw = self.gateway.send(&prompt).await.inspect_err(|e| {
            warn!(gateway = self.gateway.name(), error = %e, "model gateway failed");
        })?;

        let outcome = interpret(&raw);
        info!(outcome = outcome.label(), "interpreted model reply");
        Ok(outcome)
    }
}
