mod cli;
mod discovery;
mod error;
mod hash;
mod matcher;
mod normalize;
mod output;
mod paths;
mod sync;
mod watch;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use error::{Result, SyncError};
use output::SyncEvent;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;
use sync::{SyncOutcome, Synchronizer};
use tracing_subscriber::{fmt, EnvFilter};
use watch::WatchMode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().as_str()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    if let Err(e) = cli.validate() {
        tracing::error!("{}", e);
        return ExitCode::FAILURE;
    }

    if cli.watch {
        return match run_watch(&cli) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    match run_once(&cli) {
        Ok(outcome) => {
            print_summary(&cli, outcome.as_ref());
            ExitCode::SUCCESS
        }
        Err(e) => {
            if cli.json {
                SyncEvent::Error {
                    message: e.to_string(),
                }
                .emit();
            }
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// One pass of the state machine: validate-trigger → discover → match → sync.
///
/// `Ok(None)` is an intentional no-op: the trigger is not a recognized file
/// name, or the project holds no pairs at all. Both exit with success.
fn run_once(cli: &Cli) -> Result<Option<SyncOutcome>> {
    let trigger = cli
        .trigger
        .as_deref()
        .ok_or(SyncError::MissingTriggerPath)?;

    sync_changed_file(trigger, cli)
}

fn sync_changed_file(trigger: &Path, cli: &Cli) -> Result<Option<SyncOutcome>> {
    let trigger = paths::resolve(trigger);
    tracing::info!("File change detected: {}", trigger.display());

    if cli.json {
        SyncEvent::Start {
            trigger: trigger.clone(),
            root: cli.root.clone(),
        }
        .emit();
    }

    if !discovery::is_recognized(&trigger) {
        tracing::info!("File does not require synchronization");
        if cli.json {
            SyncEvent::Skip {
                trigger,
                reason: "not a recognized file name".to_string(),
            }
            .emit();
        }
        return Ok(None);
    }

    tracing::info!(
        "Auto-discovering {}/{} pairs...",
        discovery::PRIMARY_NAME,
        discovery::MIRROR_NAME
    );
    let pairs = discovery::discover_pairs(&cli.root)?;

    if cli.json {
        SyncEvent::Discovered { pairs: pairs.len() }.emit();
    }

    if pairs.is_empty() {
        tracing::warn!(
            "No {}/{} pairs found in project",
            discovery::PRIMARY_NAME,
            discovery::MIRROR_NAME
        );
        return Ok(None);
    }
    tracing::info!("Found {} file pair(s) in project", pairs.len());

    let pair = matcher::find_pair(&trigger, &pairs)
        .ok_or_else(|| SyncError::NoMatchingPair {
            path: trigger.clone(),
        })?;

    let outcome = Synchronizer::new(cli.dry_run).sync_pair(pair, &trigger)?;

    if cli.json {
        match &outcome {
            SyncOutcome::InSync { from, to } => SyncEvent::InSync {
                pair: pair.name.clone(),
                from: from.clone(),
                to: to.clone(),
            }
            .emit(),
            SyncOutcome::Synced { from, to, created } => SyncEvent::Synced {
                pair: pair.name.clone(),
                from: from.clone(),
                to: to.clone(),
                created: *created,
                dry_run: cli.dry_run,
            }
            .emit(),
        }
    }

    Ok(Some(outcome))
}

fn run_watch(cli: &Cli) -> Result<()> {
    let watcher = WatchMode::new(cli.root.clone(), Duration::from_millis(cli.debounce));

    watcher.run(|path| {
        if let Err(e) = sync_changed_file(path, cli) {
            if cli.json {
                SyncEvent::Error {
                    message: e.to_string(),
                }
                .emit();
            }
            tracing::error!("{}", e);
        }
    })
}

fn print_summary(cli: &Cli, outcome: Option<&SyncOutcome>) {
    if cli.quiet || cli.json {
        return;
    }

    match outcome {
        Some(outcome @ SyncOutcome::Synced { created, .. }) => {
            let label = if cli.dry_run {
                "✓ Dry-run complete (no changes made)".yellow().bold()
            } else if *created {
                "✓ Sync complete (counterpart created)".green().bold()
            } else {
                "✓ Sync complete".green().bold()
            };
            println!("\n{} ({})", label, outcome.direction());
        }
        Some(outcome @ SyncOutcome::InSync { .. }) => {
            println!(
                "\n{} ({})",
                "✓ Already in sync".green().bold(),
                outcome.direction()
            );
        }
        None => {
            println!("\n{}", "✓ Nothing to do".bright_black());
        }
    }
}
