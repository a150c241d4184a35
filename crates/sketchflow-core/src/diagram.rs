//! Strict re-validation of model output and in-memory diagram application.
//!
//! The interpreter hands back any structured value. This module is for
//! callers that need typed [`DiagramAction`]s: [`parse_actions`] rejects the
//! whole reply on the first off-schema entry, and [`Diagram::apply`] replays
//! a list in order with the same rules the browser client uses.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use sketchflow_types::diagram::{ActionList, DiagramAction};

/// The reply did not match the `{"actions":[...]}` schema.
#[derive(Debug, Error)]
#[error("reply is not a valid action list: {0}")]
pub struct ActionError(String);

/// Parse a structured value as an [`ActionList`].
///
/// Unknown `type` discriminators and missing fields invalidate the list.
pub fn parse_actions(value: &Value) -> Result<ActionList, ActionError> {
    ActionList::deserialize(value).map_err(|e| ActionError(e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    pub label: String,
    pub component_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramEdge {
    pub source: String,
    pub target: String,
    pub label: Option<String>,
}

/// Counts from one [`Diagram::apply`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub nodes_added: usize,
    pub edges_added: usize,
    /// Duplicate nodes, duplicate edges, and edges with an unknown endpoint.
    pub skipped: usize,
}

/// Nodes keyed by label, edges by label pair.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    fn has_node(&self, label: &str) -> bool {
        self.nodes.iter().any(|n| n.label == label)
    }

    fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }

    /// Apply `list` in order.
    ///
    /// - `add_node` is skipped if a node with that label exists.
    /// - `add_edge` is skipped unless both endpoints exist (including nodes
    ///   added earlier in the same list) and the edge is new.
    pub fn apply(&mut self, list: &ActionList) -> ApplySummary {
        let mut summary = ApplySummary::default();

        for action in &list.actions {
            match action {
                DiagramAction::AddNode {
                    label,
                    component_type,
                } => {
                    if self.has_node(label) {
                        summary.skipped += 1;
                        continue;
                    }
                    self.nodes.push(DiagramNode {
                        label: label.clone(),
                        component_type: component_type.clone(),
                    });
                    summary.nodes_added += 1;
                }
                DiagramAction::AddEdge {
                    source,
                    target,
                    label,
                } => {
                    if !self.has_node(source)
                        || !self.has_node(target)
                        || self.has_edge(source, target)
                    {
                        summary.skipped += 1;
                        continue;
                    }
                    self.edges.push(DiagramEdge {
                        source: source.clone(),
                        target: target.clone(),
                        label: label.clone(),
                    });
                    summary.edges_added += 1;
                }
            }
        }

        summary
    }
}
