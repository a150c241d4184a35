//! Shared fixtures for handler tests.

use axum::response::Response;
use tempfile::TempDir;

use sketchflow_core::llm::box_gateway::BoxModelGateway;
use sketchflow_core::llm::gateway::ModelGateway;
use sketchflow_types::config::GlobalConfig;
use sketchflow_types::llm::{GatewayError, ModelPrompt};

use crate::state::AppState;

/// What the stub backend does on every call.
#[derive(Clone)]
pub(crate) enum Scripted {
    Reply(String),
    Unreachable,
    Timeout,
}

struct StubGateway {
    script: Scripted,
}

impl ModelGateway for StubGateway {
    fn name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    async fn send(&self, _prompt: &ModelPrompt) -> Result<String, GatewayError> {
        match &self.script {
            Scripted::Reply(text) => Ok(text.clone()),
            Scripted::Unreachable => Err(GatewayError::Transport("connection refused".into())),
            Scripted::Timeout => Err(GatewayError::Timeout(60)),
        }
    }
}

/// State rooted in `tmp` with default config and a scripted gateway.
pub(crate) fn test_state(tmp: &TempDir, script: Scripted) -> AppState {
    AppState::from_parts(
        tmp.path().to_path_buf(),
        GlobalConfig::default(),
        BoxModelGateway::new(StubGateway { script }),
    )
}

pub(crate) async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
