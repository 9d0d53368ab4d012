use clap::Parser;
use tailwind_catalog::{Cli, Commands};

#[test]
fn test_cli_parse_list() {
    let cli = Cli::parse_from(vec!["tailwind-catalog", "list", "Spacing.Gap", "--json"]);

    match cli.command {
        Commands::List(args) => {
            assert_eq!(args.category.as_deref(), Some("Spacing.Gap"));
            assert!(args.json);
        }
        other => panic!("Unexpected command: {:?}", other),
    }
    assert!(!cli.verbose);
}

#[test]
fn test_cli_parse_lookup_by_class() {
    let cli = Cli::parse_from(vec!["tailwind-catalog", "lookup", "--class", "p-4"]);

    match cli.command {
        Commands::Lookup(args) => {
            assert_eq!(args.class.as_deref(), Some("p-4"));
            assert!(args.path.is_none());
        }
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_parse_apply_keeps_modifier_order() {
    let cli = Cli::parse_from(vec![
        "tailwind-catalog",
        "apply",
        "-m", "lg",
        "--modifier", "focus",
        "flex",
        "-v",
    ]);

    assert!(cli.verbose);
    match cli.command {
        Commands::Apply(args) => {
            assert_eq!(args.modifiers, vec!["lg", "focus"]);
            assert_eq!(args.utility, "flex");
            assert!(args.validate().is_ok());
        }
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_parse_manifest() {
    let cli = Cli::parse_from(vec![
        "tailwind-catalog",
        "manifest",
        "-o", "dist/catalog.json",
        "-c", "catalog.yaml",
        "--compact",
    ]);

    match cli.command {
        Commands::Manifest(args) => {
            assert_eq!(args.output.unwrap().to_str().unwrap(), "dist/catalog.json");
            assert_eq!(args.config.unwrap().to_str().unwrap(), "catalog.yaml");
            assert!(args.compact);
        }
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_requires_modifier() {
    let result = Cli::try_parse_from(vec!["tailwind-catalog", "apply", "flex"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_lookup_requires_path_or_class() {
    assert!(Cli::try_parse_from(vec!["tailwind-catalog", "lookup"]).is_err());
    assert!(Cli::try_parse_from(vec![
        "tailwind-catalog",
        "lookup",
        "Layout.FLEX",
        "--class",
        "flex",
    ])
    .is_err());
}

#[test]
fn test_cli_missing_subcommand() {
    assert!(Cli::try_parse_from(vec!["tailwind-catalog"]).is_err());
}
