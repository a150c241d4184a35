//! Saved diagram workflows.

use serde::{Deserialize, Serialize};

/// A named workflow snapshot as sent by the client.
///
/// `data` is an opaque JSON document serialized to a string by the client;
/// it is stored and returned byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    pub name: String,
    pub data: String,
}
