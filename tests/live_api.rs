use anyhow::Result;
use org_migrate_cli::api::{MigrationClient, constants};

#[tokio::test]
#[ignore] // Requires real credentials and WILL HIT THE API
async fn test_list_migrations_live() -> Result<()> {
    let token = std::env::var("ORG_MIGRATE_TOKEN")
        .or_else(|_| std::env::var("GITHUB_TOKEN"))
        .expect("set ORG_MIGRATE_TOKEN or GITHUB_TOKEN to run this test");
    let org = std::env::var("ORG_MIGRATE_TEST_ORG")
        .expect("set ORG_MIGRATE_TEST_ORG to run this test");

    let client = MigrationClient::new(constants::api_base(None), token);
    let migrations = client.list_migrations(&org).await?;

    println!("{} migrations for {}", migrations.len(), org);
    for migration in &migrations {
        println!("  {} {}", migration.id, migration.state);
    }
    Ok(())
}
