use anyhow::Result;
use org_migrate_cli::api::{Migration, MigrationState, default_archive_name};

#[test]
fn exported_is_the_success_terminal() {
    let state: MigrationState = serde_json::from_str("\"exported\"").unwrap();
    assert_eq!(state, MigrationState::Exported);
    assert!(state.is_terminal());
    assert!(state.is_success());
}

#[test]
fn failed_is_the_failure_terminal() {
    let state: MigrationState = serde_json::from_str("\"failed\"").unwrap();
    assert_eq!(state, MigrationState::Failed);
    assert!(state.is_terminal());
    assert!(!state.is_success());
}

#[test]
fn in_flight_states_keep_polling() {
    for raw in ["\"pending\"", "\"exporting\""] {
        let state: MigrationState = serde_json::from_str(raw).unwrap();
        assert!(!state.is_terminal(), "{} should not end the loop", raw);
    }
}

#[test]
fn unrecognized_states_keep_polling() {
    // Anything the client does not know is another wait-and-retry
    let state: MigrationState = serde_json::from_str("\"queued\"").unwrap();
    assert_eq!(state, MigrationState::Unknown);
    assert!(!state.is_terminal());
    assert!(!state.is_success());
}

#[test]
fn default_archive_name_uses_the_migration_id() {
    assert_eq!(default_archive_name(79), "migration_archive_79.tar.gz");
    assert_eq!(default_archive_name(0), "migration_archive_0.tar.gz");
}

#[test]
fn migration_parses_a_status_payload() -> Result<()> {
    let migration: Migration = serde_json::from_str(
        r#"{
            "id": 79,
            "guid": "0b989ba3-0f15-47a2-b4fb-54378af6d10d",
            "state": "exporting",
            "lock_repositories": true,
            "url": "https://api.github.com/orgs/acme/migrations/79",
            "created_at": "2026-08-28T18:08:02Z",
            "repositories": [
                {"name": "widgets", "full_name": "acme/widgets"},
                {"name": "gadgets", "full_name": "acme/gadgets"}
            ]
        }"#,
    )?;

    assert_eq!(migration.id, 79);
    assert_eq!(migration.state, MigrationState::Exporting);
    assert_eq!(migration.lock_repositories, Some(true));
    assert_eq!(migration.repositories.len(), 2);
    assert_eq!(migration.repositories[0].name, "widgets");
    assert!(migration.created_at.is_some());
    Ok(())
}

#[test]
fn migration_parses_a_minimal_payload() -> Result<()> {
    // The start response can omit optional fields
    let migration: Migration = serde_json::from_str(r#"{"id": 80, "state": "pending"}"#)?;
    assert_eq!(migration.id, 80);
    assert_eq!(migration.state, MigrationState::Pending);
    assert!(migration.repositories.is_empty());
    assert!(migration.guid.is_none());
    Ok(())
}
