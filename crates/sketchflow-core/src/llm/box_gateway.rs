//! BoxModelGateway -- object-safe dynamic dispatch wrapper for ModelGateway.
//!
//! 1. Define an object-safe `ModelGatewayDyn` trait with boxed futures
//! 2. Blanket-impl `ModelGatewayDyn` for all `T: ModelGateway`
//! 3. `BoxModelGateway` wraps `Box<dyn ModelGatewayDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use sketchflow_types::llm::{GatewayError, ModelPrompt};

use super::gateway::ModelGateway;

/// Object-safe version of [`ModelGateway`] with boxed futures.
pub trait ModelGatewayDyn: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    fn send_boxed<'a>(
        &'a self,
        prompt: &'a ModelPrompt,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>>;
}

impl<T: ModelGateway> ModelGatewayDyn for T {
    fn name(&self) -> &str {
        ModelGateway::name(self)
    }

    fn model(&self) -> &str {
        ModelGateway::model(self)
    }

    fn send_boxed<'a>(
        &'a self,
        prompt: &'a ModelPrompt,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>> {
        Box::pin(self.send(prompt))
    }
}

/// Type-erased gateway, so application state does not have to name the
/// concrete backend (and tests can swap in a stub).
pub struct BoxModelGateway {
    inner: Box<dyn ModelGatewayDyn + Send + Sync>,
}

impl BoxModelGateway {
    /// Wrap a concrete `ModelGateway` in a type-erased box.
    pub fn new<T: ModelGateway + 'static>(gateway: T) -> Self {
        Self {
            inner: Box::new(gateway),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn model(&self) -> &str {
        self.inner.model()
    }

    /// Send one prompt and return the raw completion text.
    pub async fn send(&self, prompt: &ModelPrompt) -> Result<String, GatewayError> {
        self.inner.send_boxed(prompt).await
    }
}
