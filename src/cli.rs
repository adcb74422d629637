use crate::args::{Cli, Commands, CxArgs, VariantsArgs};
use crate::class_value::ClassValue;
use crate::config::VariantConfig;
use crate::errors::{VariantError, Result};
use crate::merger::merge;
use crate::variants::{Selection, Variants};

/// Execute a parsed command and return the class string it produces.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Cx(args) => run_cx(args),
        Commands::Variants(args) => run_variants(args),
    }
}

fn run_cx(args: &CxArgs) -> Result<String> {
    let values = args
        .values
        .iter()
        .map(|raw| parse_value(raw, args.json))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = values.len(), json = args.json, "Merging class values");
    Ok(merge(&values))
}

fn parse_value(raw: &str, json: bool) -> Result<ClassValue> {
    if !json {
        return Ok(ClassValue::from(raw));
    }
    serde_json::from_str::<serde_json::Value>(raw)
        .map(ClassValue::from)
        .map_err(|e| VariantError::InvalidInput(format!("'{}' is not valid JSON: {}", raw, e)))
}

fn run_variants(args: &VariantsArgs) -> Result<String> {
    let config = VariantConfig::from_file(&args.config)?;
    let variants = if args.strict {
        Variants::try_new(config)?
    } else {
        Variants::new(config)
    };

    let selection = Selection {
        variant: args.variant.clone(),
        size: args.size.clone(),
    };
    Ok(variants.resolve(Some(&selection)))
}
