use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_entity_args_parse() {
    let cli = Cli::parse_from([
        "tn",
        "entity",
        "Invoice",
        "--framework",
        "react",
        "--languages",
        "en,fr",
        "--regenerate",
    ]);
    match cli.command {
        Commands::Entity(args) => {
            assert_eq!(args.name, "Invoice");
            assert_eq!(args.framework.as_deref(), Some("react"));
            assert_eq!(args.languages.as_deref(), Some("en,fr"));
            assert!(args.regenerate);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_project_dir_defaults_to_cwd() {
    let cli = Cli::parse_from(["tn", "ls"]);
    assert_eq!(cli.global.project_dir, ".");
    assert!(!cli.global.verbose);
}
