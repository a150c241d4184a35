//! Application state wiring the pipeline and stores together.
//!
//! AppState holds the concrete instances used by both CLI commands and
//! REST handlers. The gateway is type-erased behind `BoxModelGateway`, so
//! tests can build the same state around a stub backend.

use std::path::PathBuf;
use std::sync::Arc;

use sketchflow_core::llm::box_gateway::BoxModelGateway;
use sketchflow_core::service::interpret::InterpretService;
use sketchflow_infra::config::load_global_config;
use sketchflow_infra::filesystem::{
    resolve_data_dir, resolve_storage_dir, FsUploadStore, FsWorkflowStore,
};
use sketchflow_infra::llm::openai_compat::config::OpenAiCompatConfig;
use sketchflow_infra::llm::openai_compat::OpenAiCompatGateway;
use sketchflow_infra::secret::api_key_from_env;
use sketchflow_types::config::GlobalConfig;

/// Shared application state. Everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub interpret_service: Arc<InterpretService>,
    pub workflow_store: Arc<FsWorkflowStore>,
    pub upload_store: Arc<FsUploadStore>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data dir, load `config.toml`, read the credential and
    /// wire the OpenAI-compatible gateway.
    pub async fn init(data_dir_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir(data_dir_override);
        let config = load_global_config(&data_dir).await;

        let api_key = api_key_from_env(&config.llm.api_key_env);
        if api_key.is_none() {
            tracing::warn!(
                env = %config.llm.api_key_env,
                "no model API key set; interpret requests will fail until it is configured"
            );
        }

        let gateway =
            OpenAiCompatGateway::new(OpenAiCompatConfig::from_llm_config(&config.llm, api_key))?;

        tracing::debug!(
            data_dir = %data_dir.display(),
            model = %config.llm.model,
            base_url = %config.llm.base_url,
            "application state initialized"
        );

        Ok(Self::from_parts(data_dir, config, BoxModelGateway::new(gateway)))
    }

    /// Assemble state from an already-built gateway.
    pub fn from_parts(data_dir: PathBuf, config: GlobalConfig, gateway: BoxModelGateway) -> Self {
        let workflows_dir = resolve_storage_dir(&data_dir, &config.storage.workflows_dir);
        let uploads_dir = resolve_storage_dir(&data_dir, &config.storage.uploads_dir);

        Self {
            interpret_service: Arc::new(InterpretService::new(gateway)),
            workflow_store: Arc::new(FsWorkflowStore::new(workflows_dir)),
            upload_store: Arc::new(FsUploadStore::new(uploads_dir)),
            config: Arc::new(config),
            data_dir,
        }
    }
}
