//! Provider selection data for the creation flow.
//!
//! The picker shows two collections side by side: providers already
//! installed on this machine and the static recommendations. They stay
//! separate so presentation can distinguish "already available" from
//! "suggested"; an identifier appearing in both is expected and is never
//! deduplicated away.

use devpod_core::ProviderId;
use serde::{Deserialize, Serialize};

/// A provider installed locally, as reported by the provider-management
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedProvider {
    pub id: ProviderId,
    pub display_name: String,
}

impl NamedProvider {
    pub fn new(id: impl Into<ProviderId>, display_name: impl Into<String>) -> Self {
        NamedProvider {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// One entry of the static recommendation catalog: the provider name the
/// UI shows and the source `provider add` consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedProviderSource {
    pub name: &'static str,
    pub source: &'static str,
}

/// Fixed catalog of suggested providers. Application configuration, not
/// user data; immutable at runtime.
pub const RECOMMENDED_PROVIDER_SOURCES: &[RecommendedProviderSource] = &[
    RecommendedProviderSource {
        name: "docker",
        source: "docker",
    },
    RecommendedProviderSource {
        name: "kubernetes",
        source: "kubernetes",
    },
    RecommendedProviderSource {
        name: "aws",
        source: "aws",
    },
    RecommendedProviderSource {
        name: "gcloud",
        source: "gcloud",
    },
    RecommendedProviderSource {
        name: "azure",
        source: "azure",
    },
    RecommendedProviderSource {
        name: "digitalocean",
        source: "digitalocean",
    },
    RecommendedProviderSource {
        name: "ssh",
        source: "ssh",
    },
];

/// The two collections backing the provider picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectProviderOptions {
    installed: Vec<NamedProvider>,
    recommended: &'static [RecommendedProviderSource],
}

impl SelectProviderOptions {
    /// Pair the locally installed providers with the static catalog.
    pub fn new(installed: Vec<NamedProvider>) -> Self {
        SelectProviderOptions {
            installed,
            recommended: RECOMMENDED_PROVIDER_SOURCES,
        }
    }

    pub fn installed(&self) -> &[NamedProvider] {
        &self.installed
    }

    pub fn recommended(&self) -> &'static [RecommendedProviderSource] {
        self.recommended
    }
}
