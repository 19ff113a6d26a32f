//! mr-radar binary entry point

use clap::Parser;
use mr_radar::{Config, GitLabClient, Report, Result, fetch_review_queue};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, error, warn};

/// Report which of a GitLab project's open merge requests are ready to merge
#[derive(Debug, Parser)]
#[command(name = "mr-radar", version, about)]
struct Cli {
    /// Path to the config file (default: {config_dir}/mr-radar/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured target branch
    #[arg(long, value_name = "NAME")]
    branch: Option<String>,

    /// Print an aligned detail block per MR instead of the grouped report
    #[arg(long)]
    details: bool,

    /// Increase diagnostic verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Diagnostics go to stderr so the stdout report stays redirectable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Load config, build the review queue, and print the report.
async fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(branch) = &cli.branch {
        config.target_branch.clone_from(branch);
    }

    if config.authors.is_empty() {
        warn!("no authors configured; reporting merge requests from every author");
    }

    let client = GitLabClient::new(&config.base_url, config.project_id, &config.api_token)?;
    let queue = fetch_review_queue(&client, &config).await?;

    if cli.details {
        for item in &queue {
            println!("{item}");
        }
    } else {
        let report = Report::build(&config.target_branch, queue);
        print!("{}", report.render());
    }

    Ok(())
}
