use clap::Parser;
use std::fs;
use tempfile::TempDir;
use class_variants::{run, Cli, Commands};

const BUTTON_YAML: &str = r#"
base: btn
variant:
  default: btn-primary
  secondary: btn-secondary
size:
  default: btn-md
  lg: btn-lg
"#;

fn write_config(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn test_cli_parse_cx() {
    let cli = Cli::parse_from(["class-variants-cli", "cx", "foo", "bar"]);

    match cli.command {
        Commands::Cx(args) => {
            assert_eq!(args.values, vec!["foo", "bar"]);
            assert!(!args.json);
        }
        Commands::Variants(_) => panic!("Unexpected Variants command"),
    }
    assert!(!cli.verbose);
}

#[test]
fn test_cli_parse_variants_with_flags() {
    let cli = Cli::parse_from([
        "class-variants-cli",
        "variants",
        "-c", "button.yaml",
        "--variant", "secondary",
        "--size", "lg",
        "--strict",
        "-v",
    ]);

    match cli.command {
        Commands::Variants(args) => {
            assert_eq!(args.config.to_str().unwrap(), "button.yaml");
            assert_eq!(args.variant.as_deref(), Some("secondary"));
            assert_eq!(args.size.as_deref(), Some("lg"));
            assert!(args.strict);
        }
        Commands::Cx(_) => panic!("Unexpected Cx command"),
    }
    assert!(cli.verbose);
}

#[test]
fn test_cli_variants_requires_config() {
    let result = Cli::try_parse_from(["class-variants-cli", "variants", "--size", "lg"]);
    assert!(result.is_err());
}

#[test]
fn test_run_cx_literal() {
    let cli = Cli::parse_from(["class-variants-cli", "cx", "foo", "", "bar baz"]);
    insta::assert_snapshot!(run(&cli).unwrap(), @"foo bar baz");
}

#[test]
fn test_run_cx_json() {
    let cli = Cli::parse_from([
        "class-variants-cli",
        "cx",
        "--json",
        "\"foo\"",
        r#"{"bar": true, "baz": false}"#,
        "null",
        "\"qux\"",
    ]);
    insta::assert_snapshot!(run(&cli).unwrap(), @"foo bar qux");
}

#[test]
fn test_run_cx_without_values() {
    let cli = Cli::parse_from(["class-variants-cli", "cx"]);
    assert_eq!(run(&cli).unwrap(), "");
}

#[test]
fn test_run_variants_from_yaml() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "button.yaml", BUTTON_YAML);

    let cli = Cli::parse_from([
        "class-variants-cli", "variants", "-c", &config, "--variant", "secondary", "--size", "lg",
    ]);
    insta::assert_snapshot!(run(&cli).unwrap(), @"btn btn-secondary btn-lg");

    let cli = Cli::parse_from(["class-variants-cli", "variants", "-c", &config]);
    insta::assert_snapshot!(run(&cli).unwrap(), @"btn btn-primary btn-md");
}

#[test]
fn test_run_variants_unknown_name() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "button.yml", BUTTON_YAML);

    let cli = Cli::parse_from([
        "class-variants-cli", "variants", "-c", &config, "--variant", "nonexistent",
    ]);
    assert_eq!(run(&cli).unwrap(), "btn btn-md");
}

#[test]
fn test_run_variants_strict_rejects_missing_default() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "card.json",
        r#"{"base": "card", "variant": {"flat": "card-flat"}, "size": {"default": "card-md"}}"#,
    );

    let lenient = Cli::parse_from(["class-variants-cli", "variants", "-c", &config]);
    assert_eq!(run(&lenient).unwrap(), "card card-md");

    let strict = Cli::parse_from(["class-variants-cli", "variants", "-c", &config, "--strict"]);
    let err = run(&strict).unwrap_err();
    assert!(err.to_string().contains("variant"), "unexpected error: {}", err);
}
