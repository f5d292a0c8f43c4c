use clap::Parser;
use org_migrate_cli::cli::app::{Cli, Commands};

#[test]
fn export_rejects_missing_repositories() {
    // Organization alone is not enough; at least one repository is required
    let result = Cli::try_parse_from(["org-migrate", "export", "acme"]);
    let err = result.err().expect("parse should fail without repositories");
    let rendered = err.to_string();
    assert!(rendered.contains("Usage"), "error should carry usage text: {}", rendered);
}

#[test]
fn export_rejects_no_positionals() {
    assert!(Cli::try_parse_from(["org-migrate", "export"]).is_err());
}

#[test]
fn export_parses_org_and_repositories() {
    let cli = Cli::try_parse_from(["org-migrate", "export", "acme", "widgets", "gadgets"])
        .expect("minimal export invocation should parse");
    let Commands::Export(args) = cli.command else {
        panic!("expected export subcommand");
    };
    assert_eq!(args.org, "acme");
    assert_eq!(args.repos, vec!["widgets", "gadgets"]);
    assert!(!args.lock);
    assert!(!args.no_download);
    assert!(args.output.is_none());
    assert!(args.timeout.is_none());
}

#[test]
fn export_parses_options() {
    let cli = Cli::try_parse_from([
        "org-migrate",
        "export",
        "acme",
        "widgets",
        "--lock",
        "--no-download",
        "--poll-interval",
        "5",
        "--timeout",
        "600",
        "--hostname",
        "ghe.example.com",
        "-o",
        "backup.tar.gz",
    ])
    .expect("full export invocation should parse");
    let Commands::Export(args) = cli.command else {
        panic!("expected export subcommand");
    };
    assert!(args.lock);
    assert!(args.no_download);
    assert_eq!(args.poll_interval, Some(5));
    assert_eq!(args.timeout, Some(600));
    assert_eq!(args.connection.hostname.as_deref(), Some("ghe.example.com"));
    assert_eq!(args.output.as_deref(), Some(std::path::Path::new("backup.tar.gz")));
}

#[test]
fn status_requires_numeric_id() {
    assert!(Cli::try_parse_from(["org-migrate", "status", "acme", "not-a-number"]).is_err());

    let cli = Cli::try_parse_from(["org-migrate", "status", "acme", "79"]).unwrap();
    let Commands::Status(args) = cli.command else {
        panic!("expected status subcommand");
    };
    assert_eq!(args.org, "acme");
    assert_eq!(args.id, 79);
}

#[test]
fn unlock_takes_org_id_and_repo() {
    let cli = Cli::try_parse_from(["org-migrate", "unlock", "acme", "79", "widgets"]).unwrap();
    let Commands::Unlock(args) = cli.command else {
        panic!("expected unlock subcommand");
    };
    assert_eq!((args.org.as_str(), args.id, args.repo.as_str()), ("acme", 79, "widgets"));
}
