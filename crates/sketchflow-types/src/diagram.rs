//! Diagram editing actions produced by the language model.
//!
//! An [`ActionList`] is an ordered sequence of [`DiagramAction`]s. Order is
//! significant: an `add_edge` may reference a node introduced by an earlier
//! `add_node` in the same list.

use serde::{Deserialize, Serialize};

/// One directive to mutate a diagram.
///
/// Serialized with an internal `type` discriminator that must be exactly
/// `add_node` or `add_edge`:
///
/// ```json
/// {"type":"add_node","label":"A","componentType":"Kafka"}
/// {"type":"add_edge","source":"A","target":"B"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagramAction {
    AddNode {
        label: String,
        #[serde(rename = "componentType")]
        component_type: String,
    },
    AddEdge {
        source: String,
        target: String,
        /// Optional edge caption. Not part of the prompt contract, but
        /// accepted when the model supplies one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl DiagramAction {
    /// The wire discriminator for this action.
    pub fn kind(&self) -> &'static str {
        match self {
            DiagramAction::AddNode { .. } => "add_node",
            DiagramAction::AddEdge { .. } => "add_edge",
        }
    }
}

/// The full reply shape the model is instructed to produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionList {
    pub actions: Vec<DiagramAction>,
}

impl ActionList {
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Inbound body of `POST /api/ai/interpret`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretationRequest {
    pub message: String,
}
