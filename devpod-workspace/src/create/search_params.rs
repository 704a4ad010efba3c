//! Projection of route search parameters onto the creation form.
//!
//! Deep links (`devpod://…?workspaceSource=…`) land in the router as a
//! generic query-parameter bag. This type is the creation-relevant subset
//! of that bag: a projection, never a store of its own. It is derived
//! from the ambient route state whenever needed and holds no independent
//! truth.

use devpod_core::ProviderId;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The subset of search parameters that may pre-fill the creation form.
/// `workspace_source` is the common case; provider and workspace id show
/// up when a link pins them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateWorkspaceSearchParams {
    pub workspace_source: Option<String>,
    #[serde(rename = "providerID")]
    pub provider_id: Option<ProviderId>,
    #[serde(rename = "workspaceID")]
    pub workspace_id: Option<String>,
}

impl CreateWorkspaceSearchParams {
    pub const PARAM_WORKSPACE_SOURCE: &'static str = "workspaceSource";
    pub const PARAM_PROVIDER_ID: &'static str = "providerID";
    pub const PARAM_WORKSPACE_ID: &'static str = "workspaceID";

    /// Project the creation-relevant parameters out of a generic query
    /// bag. Unknown keys are ignored; empty values carry no intent and
    /// are treated as absent, so hydration can never blank a field.
    pub fn from_query<'a>(query: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut params = CreateWorkspaceSearchParams::default();
        for (key, value) in query {
            if value.is_empty() {
                continue;
            }
            match key {
                Self::PARAM_WORKSPACE_SOURCE => {
                    params.workspace_source = Some(value.to_string());
                }
                Self::PARAM_PROVIDER_ID => {
                    params.provider_id = Some(ProviderId::new(value));
                }
                Self::PARAM_WORKSPACE_ID => {
                    params.workspace_id = Some(value.to_string());
                }
                _ => trace!(key, "ignoring unrelated search parameter"),
            }
        }
        params
    }

    /// True when the projection carries nothing to pre-fill.
    pub fn is_empty(&self) -> bool {
        self.workspace_source.is_none()
            && self.provider_id.is_none()
            && self.workspace_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_picks_known_keys_only() {
        let params = CreateWorkspaceSearchParams::from_query([
            ("workspaceSource", "github.com/loft-sh/devpod"),
            ("tab", "create"),
            ("providerID", "docker"),
        ]);
        assert_eq!(
            params.workspace_source.as_deref(),
            Some("github.com/loft-sh/devpod")
        );
        assert_eq!(params.provider_id, Some(ProviderId::new("docker")));
        assert_eq!(params.workspace_id, None);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let params = CreateWorkspaceSearchParams::from_query([("workspaceSource", "")]);
        assert!(params.is_empty());
    }

    #[test]
    fn test_empty_query_yields_empty_projection() {
        let params = CreateWorkspaceSearchParams::from_query(std::iter::empty());
        assert!(params.is_empty());
    }
}
