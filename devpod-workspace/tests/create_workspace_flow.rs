//! End-to-end creation flow: deep-link projection, form editing,
//! resolution, and the final `up` argument vector.

use devpod_commands::config::CommandConfigOverrides;
use devpod_core::{ProviderId, WorkspaceId};
use devpod_workspace::{CreateWorkspaceSearchParams, FieldName, FormValues};

#[test]
fn test_deep_link_to_up_vector() {
    // The router hands over its query bag; only creation-relevant keys
    // survive the projection.
    let params = CreateWorkspaceSearchParams::from_query([
        ("workspaceSource", "github.com/loft-sh/devpod"),
        ("providerID", "docker"),
        ("theme", "dark"),
    ]);

    let mut form = FormValues::new();
    form.hydrate(&params);
    form.set(FieldName::DefaultIde, "vscode");
    form.set(FieldName::PrebuildRepository, "ghcr.io/loft-sh/prebuilds");

    // The id field stayed blank, so the caller resolved the name via
    // `helper get-workspace-name` before resolving the form.
    let provider_id = form.provider.clone();
    let args = form
        .resolve(WorkspaceId::new("devpod"), provider_id)
        .expect("form should resolve");

    let cmd = args.up_command(CommandConfigOverrides::default());
    assert_eq!(
        cmd.argv(),
        [
            "bin/devpod-cli",
            "up",
            "github.com/loft-sh/devpod",
            "--id",
            "devpod",
            "--provider",
            "docker",
            "--ide",
            "vscode",
            "--prebuild-repository",
            "ghcr.io/loft-sh/prebuilds",
            "--log-output=json",
        ]
    );
    assert!(cmd.config().stream_response);
    assert!(!cmd.config().debug);
}

#[test]
fn test_hydration_is_idempotent() {
    let params = CreateWorkspaceSearchParams::from_query([
        ("workspaceSource", "github.com/org/repo"),
        ("workspaceID", "repo-2"),
    ]);

    let mut once = FormValues::new();
    once.hydrate(&params);

    let mut twice = once.clone();
    twice.hydrate(&params);

    assert_eq!(once, twice);
}

#[test]
fn test_hydration_never_blanks_unmentioned_fields() {
    let mut form = FormValues::new();
    form.set(FieldName::Source, "abc");

    let provider_only =
        CreateWorkspaceSearchParams::from_query([("providerID", "kubernetes")]);
    form.hydrate(&provider_only);

    assert_eq!(form.get(FieldName::Source), "abc");
    assert_eq!(form.provider, ProviderId::new("kubernetes"));
}

#[test]
fn test_second_attempt_starts_from_a_fresh_form() {
    // resolve() consumes the record; a new attempt re-initializes.
    let mut form = FormValues::new();
    form.set(FieldName::Source, "github.com/org/repo");
    let _args = form
        .resolve(WorkspaceId::new("one"), ProviderId::new("docker"))
        .unwrap();

    let fresh = FormValues::new();
    assert_eq!(fresh.get(FieldName::Source), "");
}

#[test]
fn test_incomplete_resolution_reports_the_missing_field() {
    let err = FormValues::new()
        .resolve(WorkspaceId::new(""), ProviderId::new("docker"))
        .unwrap_err();
    assert!(err.to_string().contains("workspaceID"));
}
