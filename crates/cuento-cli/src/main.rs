//! `cuento` command line front end
//!
//! Lists catalogs and skills, and replays a file of field events into a
//! configuration to build (and optionally dry-run submit) a request.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use cuento_catalog::{CatalogSet, ContextMode, FieldKind, PageMode};
use cuento_request::{describe, CompletenessRules, DryRunGenerator, Session};
use cuento_state::{FieldEvent, Skill};
use tracing_subscriber::EnvFilter;

fn catalog_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("context-mode")
            .long("context-mode")
            .default_value("genre")
            .value_parser(["genre", "educational"])
            .help("Catalog backing the context field"),
    )
    .arg(
        Arg::new("page-mode")
            .long("page-mode")
            .default_value("page-count")
            .value_parser(["page-count", "single-page"])
            .help("Catalog backing the page length field"),
    )
    .arg(
        Arg::new("catalogs")
            .long("catalogs")
            .value_parser(value_parser!(PathBuf))
            .help("JSON or YAML catalog set replacing the built-in one"),
    )
}

fn cli() -> Command {
    Command::new("cuento")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Story request configuration core")
        .subcommand_required(true)
        .subcommand(
            catalog_args(Command::new("catalogs").about("List catalog values")).arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Output as JSON"),
            ),
        )
        .subcommand(Command::new("skills").about("List the reading skills"))
        .subcommand(
            catalog_args(Command::new("build").about("Apply field events and build a request"))
                .arg(
                    Arg::new("events")
                        .long("events")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON or YAML list of field events"),
                )
                .arg(
                    Arg::new("title-only")
                        .long("title-only")
                        .action(ArgAction::SetTrue)
                        .help("Accept a title in place of a context"),
                )
                .arg(
                    Arg::new("submit")
                        .long("submit")
                        .action(ArgAction::SetTrue)
                        .help("Hand the request to the dry-run generator"),
                ),
        )
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

fn load_catalogs(args: &ArgMatches) -> Result<Arc<CatalogSet>> {
    if let Some(path) = args.get_one::<PathBuf>("catalogs") {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let set = if is_yaml(path) {
            CatalogSet::from_yaml(&text)
        } else {
            CatalogSet::from_json(&text)
        }
        .with_context(|| format!("loading catalogs from {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded catalog set");
        return Ok(Arc::new(set));
    }

    let context_mode: ContextMode = args
        .get_one::<String>("context-mode")
        .map_or("genre", String::as_str)
        .parse()?;
    let page_mode: PageMode = args
        .get_one::<String>("page-mode")
        .map_or("page-count", String::as_str)
        .parse()?;
    Ok(CatalogSet::builtin(context_mode, page_mode))
}

fn load_events(path: &Path) -> Result<Vec<FieldEvent>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let events = if is_yaml(path) {
        serde_yaml::from_str(&text)?
    } else {
        serde_json::from_str(&text)?
    };
    Ok(events)
}

fn print_catalogs(set: &CatalogSet, json: bool) -> Result<()> {
    if json {
        println!("{}", set.to_json()?);
        return Ok(());
    }

    println!("Context mode: {}", set.context_mode());
    println!("Page mode: {}", set.page_mode());
    for kind in FieldKind::ALL {
        println!();
        println!("{} ({kind}):", kind.label(set.context_mode()));
        for (i, value) in set.values(kind).enumerate() {
            println!("  {:>2}. {value}", i + 1);
        }
    }
    if !set.supports_characters() {
        println!();
        println!("Characters and secondary competences are not used in this mode.");
    }
    Ok(())
}

fn print_skills() {
    for skill in Skill::ALL {
        println!("{:<26} {}", skill.key(), skill.label());
    }
}

async fn run_build(args: &ArgMatches) -> Result<ExitCode> {
    let catalogs = load_catalogs(args)?;
    let events_path = args
        .get_one::<PathBuf>("events")
        .context("--events is required")?;
    let events = load_events(events_path)?;
    let rules = CompletenessRules::new().with_context_required(!args.get_flag("title-only"));

    let mut session = Session::new(catalogs, DryRunGenerator::new()).with_rules(rules);
    for (i, event) in events.into_iter().enumerate() {
        if let Err(e) = session.apply(event) {
            eprintln!("event #{}: {e}", i + 1);
            return Ok(ExitCode::FAILURE);
        }
    }

    let request = match session.preview() {
        Ok(request) => request,
        Err(failures) => {
            eprintln!("Request incomplete:");
            for failure in &failures {
                eprintln!("  - {failure}");
            }
            tracing::debug!("{}", describe(&failures));
            return Ok(ExitCode::FAILURE);
        }
    };
    println!("{}", request.to_json()?);

    if args.get_flag("submit") {
        let receipt = session.submit().await?;
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    }

    Ok(ExitCode::SUCCESS)
}

async fn run(matches: &ArgMatches) -> Result<ExitCode> {
    match matches.subcommand() {
        Some(("catalogs", args)) => {
            let set = load_catalogs(args)?;
            print_catalogs(&set, args.get_flag("json"))?;
            Ok(ExitCode::SUCCESS)
        }
        Some(("skills", _)) => {
            print_skills();
            Ok(ExitCode::SUCCESS)
        }
        Some(("build", args)) => run_build(args).await,
        _ => Ok(ExitCode::FAILURE),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    match run(&matches).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
