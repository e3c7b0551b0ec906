use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{info, warn};

use perfkit::inspect::{build, inspect, parse_assignment};
use perfkit::{init_logging, FamilyKind, FootprintDefaults, BUILD_DATE, VERSION};

const USAGE: &str = "\
Usage:
  perfkit families
  perfkit inspect <family> [name=value ...] [--defaults <file>]";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let mut args = std::env::args().skip(1);
    let Some(command) = args.next() else {
        println!("{}", USAGE);
        return Ok(());
    };

    match command.as_str() {
        "families" => {
            for kind in FamilyKind::ALL {
                println!("{}", kind);
            }
        }
        "inspect" => run_inspect(args.collect())?,
        "--version" | "version" => println!("perfkit {} ({})", VERSION, BUILD_DATE),
        other => {
            warn!("Unknown command '{}'", other);
            bail!("unknown command '{}'\n{}", other, USAGE);
        }
    }

    Ok(())
}

fn run_inspect(args: Vec<String>) -> anyhow::Result<()> {
    let mut family = None;
    let mut defaults_file: Option<PathBuf> = None;
    let mut assignments = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--defaults" {
            let path = args.next().context("--defaults needs a file")?;
            defaults_file = Some(PathBuf::from(path));
        } else if family.is_none() {
            family = Some(arg);
        } else {
            match parse_assignment(&arg) {
                Ok(assignment) => assignments.push(assignment),
                Err(e) => {
                    warn!("{}", e);
                    return Err(e.into());
                }
            }
        }
    }

    let Some(family) = family else {
        bail!("inspect needs a family name\n{}", USAGE);
    };

    let defaults = match defaults_file {
        Some(path) => FootprintDefaults::load_from_file(&path)
            .with_context(|| format!("loading defaults from {}", path.display()))?,
        None => FootprintDefaults::load_user_or_default()?,
    };

    let mut footprint = build(&family, &assignments, &defaults).map_err(|e| {
        warn!("Rejected footprint: {}", e);
        e
    })?;
    let report = inspect(&mut footprint);
    info!(
        "Inspected {} with {} control points",
        report.family,
        report.control_points.len()
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
