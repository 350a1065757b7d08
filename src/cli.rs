use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdmirror")]
#[command(about = "Keep paired agent instruction files in sync", long_about = None)]
#[command(version)]
#[command(after_help = "EXAMPLES:
    # Sync the counterpart of a changed file
    mdmirror docs/CLAUDE.md

    # Trigger path from the environment (hook integration)
    FILE_PATH=docs/AGENTS.md mdmirror

    # Preview without writing
    mdmirror docs/CLAUDE.md --dry-run

    # Watch the whole tree and sync on every change
    mdmirror --watch

    # Machine-readable events
    mdmirror docs/CLAUDE.md --json")]
pub struct Cli {
    /// Changed file that triggers the run (falls back to $FILE_PATH)
    #[arg(env = "FILE_PATH")]
    pub trigger: Option<PathBuf>,

    /// Project root to discover pairs under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Show what would be written without applying it (dry-run)
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only show errors)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output JSON (newline-delimited JSON for scripting)
    #[arg(long)]
    pub json: bool,

    /// Watch mode - continuously monitor the tree for changes
    #[arg(long)]
    pub watch: bool,

    /// Debounce interval for watch mode, in milliseconds
    #[arg(long, default_value = "500")]
    pub debounce: u64,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.root.is_dir() {
            anyhow::bail!("Project root does not exist: {}", self.root.display());
        }

        if self.watch && self.dry_run {
            anyhow::bail!("--watch cannot be combined with --dry-run");
        }

        Ok(())
    }

    pub fn log_level(&self) -> tracing::Level {
        if self.quiet || self.json {
            return tracing::Level::ERROR;
        }

        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
