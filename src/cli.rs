//! Command handlers for the `tailwind-catalog` binary.
//!
//! Handlers write to any [`Write`] so they can be exercised without a
//! process boundary.

use std::io::Write;

use crate::args::{ApplyArgs, Cli, Commands, ListArgs, LookupArgs, ManifestArgs};
use crate::catalog::{self, Category};
use crate::config::CatalogConfig;
use crate::errors::{CatalogError, Result};
use crate::manifest::CatalogManifest;
use crate::modifier::Modifier;

/// Dispatch a parsed command line
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::List(args) => list(&args, out),
        Commands::Lookup(args) => lookup(&args, out),
        Commands::Apply(args) => apply(&args, out),
        Commands::Manifest(args) => manifest(&args, out),
    }
}

fn list(args: &ListArgs, out: &mut impl Write) -> Result<()> {
    let Some(path) = &args.category else {
        if args.json {
            let counts: indexmap::IndexMap<&str, usize> = Category::ALL
                .iter()
                .map(|c| (c.path(), c.len()))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&counts)?)?;
        } else {
            for category in Category::ALL {
                writeln!(out, "{:<28} {:>4}", category.path(), category.len())?;
            }
            writeln!(out, "{:<28} {:>4}", "total", catalog::total_len())?;
        }
        return Ok(());
    };

    let category: Category = path.parse()?;
    if args.json {
        let entries: Vec<_> = category.entries().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        for (name, class_name) in category.table() {
            writeln!(out, "{} = {}", name, class_name)?;
        }
    }
    Ok(())
}

fn lookup(args: &LookupArgs, out: &mut impl Write) -> Result<()> {
    if let Some(class_name) = &args.class {
        let found = catalog::find_class(class_name);
        if found.is_empty() {
            return Err(CatalogError::InvalidInput(format!(
                "class '{}' is not in the catalog",
                class_name
            )));
        }
        for entry in found {
            writeln!(out, "{}", entry.path())?;
        }
        return Ok(());
    }

    let path = args
        .path
        .as_deref()
        .ok_or_else(|| CatalogError::InvalidInput("a PATH or --class is required".to_string()))?;
    writeln!(out, "{}", catalog::resolve(path)?)?;
    Ok(())
}

fn apply(args: &ApplyArgs, out: &mut impl Write) -> Result<()> {
    args.validate().map_err(CatalogError::InvalidInput)?;

    let modifiers = args
        .modifiers
        .iter()
        .map(|m| m.parse::<Modifier>())
        .collect::<Result<Vec<_>>>()?;

    // Category.NAME paths resolve to their class; input that is not a path
    // is taken literally. A known category with an unknown name is a typo.
    let utility = match catalog::resolve(&args.utility) {
        Ok(class_name) => class_name.to_string(),
        Err(CatalogError::InvalidInput(_)) | Err(CatalogError::UnknownCategory(_)) => {
            args.utility.clone()
        }
        Err(e) => return Err(e),
    };

    let result = modifiers
        .iter()
        .fold(utility, |acc, modifier| modifier.apply(&acc));
    writeln!(out, "{}", result)?;
    Ok(())
}

fn manifest(args: &ManifestArgs, out: &mut impl Write) -> Result<()> {
    let config = match &args.config {
        Some(path) => CatalogConfig::from_file(path)?,
        None => CatalogConfig::default(),
    };

    let manifest = CatalogManifest::from_config(&config)?;
    let json = if args.compact || !config.manifest.pretty {
        manifest.to_compact_json()?
    } else {
        manifest.to_pretty_json()?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            tracing::info!(
                path = %path.display(),
                utilities = manifest.metadata.total_utilities,
                "wrote catalog manifest"
            );
        }
        None => writeln!(out, "{}", json)?,
    }
    Ok(())
}
