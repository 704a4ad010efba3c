//! Identifier newtypes for the two id spaces the desktop client juggles.
//!
//! Workspace and provider identifiers are both plain strings on the wire,
//! which makes them easy to swap at a call site without the compiler
//! noticing. Wrapping each in its own zero-cost newtype keeps them apart.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a workspace known to the DevPod CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        WorkspaceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkspaceId {
    fn from(id: &str) -> Self {
        WorkspaceId(id.to_string())
    }
}

impl From<String> for WorkspaceId {
    fn from(id: String) -> Self {
        WorkspaceId(id)
    }
}

/// Identifier of a provider backend (e.g. `docker`, `aws`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        ProviderId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(id: &str) -> Self {
        ProviderId(id.to_string())
    }
}

impl From<String> for ProviderId {
    fn from(id: String) -> Self {
        ProviderId(id)
    }
}
