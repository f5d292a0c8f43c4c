use anyhow::Result;
use clap::Parser;
use org_migrate_cli::api::MigrationRequest;
use org_migrate_cli::cli::app::{Cli, Commands};
use serde_json::Value;

const FLAG_KEYS: [&str; 6] = [
    "lock_repositories",
    "exclude_attachments",
    "exclude_git_data",
    "exclude_metadata",
    "exclude_owner_projects",
    "exclude_releases",
];

#[test]
fn body_always_carries_all_six_flags_and_all_repositories() -> Result<()> {
    let request = MigrationRequest::new(vec!["alpha".into(), "beta".into(), "gamma".into()]);
    let body = serde_json::to_value(&request)?;

    for key in FLAG_KEYS {
        assert!(body.get(key).is_some(), "body is missing {}", key);
        assert_eq!(body[key], Value::Bool(false));
    }
    assert_eq!(
        body["repositories"],
        serde_json::json!(["alpha", "beta", "gamma"])
    );
    Ok(())
}

#[test]
fn flag_order_does_not_change_the_body() -> Result<()> {
    let first = Cli::try_parse_from([
        "org-migrate",
        "export",
        "acme",
        "widgets",
        "gadgets",
        "--lock",
        "--exclude-releases",
        "--exclude-git-data",
    ])?;
    let second = Cli::try_parse_from([
        "org-migrate",
        "export",
        "--exclude-git-data",
        "--exclude-releases",
        "acme",
        "--lock",
        "widgets",
        "gadgets",
    ])?;

    let (Commands::Export(first), Commands::Export(second)) = (first.command, second.command)
    else {
        panic!("expected export subcommand");
    };

    let first_body = serde_json::to_value(first.to_request())?;
    let second_body = serde_json::to_value(second.to_request())?;
    assert_eq!(first_body, second_body);

    assert_eq!(first_body["lock_repositories"], Value::Bool(true));
    assert_eq!(first_body["exclude_releases"], Value::Bool(true));
    assert_eq!(first_body["exclude_git_data"], Value::Bool(true));
    assert_eq!(first_body["exclude_attachments"], Value::Bool(false));
    assert_eq!(first_body["exclude_metadata"], Value::Bool(false));
    assert_eq!(first_body["exclude_owner_projects"], Value::Bool(false));
    assert_eq!(
        first_body["repositories"],
        serde_json::json!(["widgets", "gadgets"])
    );
    Ok(())
}
