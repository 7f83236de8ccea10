use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trendlens::report::{Report, Step};
use trendlens::{ui, Config, Datasets};

#[derive(Parser)]
#[command(name = "trendlens", version, about = "Insights from saved Twitter trends and search results")]
struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Worldwide trends snapshot
    #[arg(long, global = true)]
    worldwide: Option<PathBuf>,

    /// Regional trends snapshot
    #[arg(long, global = true)]
    regional: Option<PathBuf>,

    /// Saved hashtag search results
    #[arg(long, global = true)]
    tweets: Option<PathBuf>,

    /// How many entries frequency lists show
    #[arg(long, global = true)]
    top: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the walkthrough to stdout
    Report(ReportArgs),

    /// Interactive table and language chart
    Dashboard,
}

#[derive(Args, Default)]
struct ReportArgs {
    /// Only print this step (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    step: Option<u8>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.worldwide {
            config.datasets.worldwide_trends = path.clone();
        }
        if let Some(path) = &self.regional {
            config.datasets.regional_trends = path.clone();
        }
        if let Some(path) = &self.tweets {
            config.datasets.tweets = path.clone();
        }
        if let Some(top) = self.top {
            config.report.top_n = top;
        }
    }
}

/// Report output owns stdout, so logs go to stderr. The dashboard owns the
/// whole terminal, so it only logs when a file is given.
fn init_tracing(log_file: Option<&Path>, dashboard: bool) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "trendlens=info".into());

    match (log_file, dashboard) {
        (Some(path), _) => {
            ensure_parent_dir(path)?;
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            let stderr_layer = (!dashboard)
                .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::sync::Mutex::new(file))
                        .with_ansi(false),
                )
                .init();
        }
        (None, false) => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        (None, true) => {}
    }
    Ok(())
}

/// Create the directory a log file lives in. A bare file name has an empty
/// parent and needs nothing.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display())),
        _ => Ok(()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dashboard = matches!(cli.command, Some(Commands::Dashboard));
    init_tracing(cli.log_file.as_deref(), dashboard)?;

    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    cli.apply_overrides(&mut config);

    let data = Datasets::load(&config.datasets).context("failed to load datasets")?;

    match cli.command {
        Some(Commands::Dashboard) => ui::run(&data, &config),
        Some(Commands::Report(args)) => print_report(&data, &config, args),
        None => print_report(&data, &config, ReportArgs::default()),
    }
}

fn print_report(data: &Datasets, config: &Config, args: ReportArgs) -> Result<()> {
    let report = Report::new(data, &config.report);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.step.and_then(Step::from_number) {
        Some(step) => report.write_step(step, &mut out)?,
        None => report.write_all(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        assert!(ensure_parent_dir(Path::new("trendlens.log")).is_ok());
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("logs").join("deep").join("trendlens.log");
        ensure_parent_dir(&log).unwrap();
        assert!(dir.path().join("logs").join("deep").is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let err = ensure_parent_dir(&blocker.join("trendlens.log")).unwrap_err();
        assert!(err.to_string().contains("failed to create log directory"));
    }
}
