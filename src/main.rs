use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use source_mirror::{
    CLOUD_SOURCE_ENDPOINT, ConnectionDescriptor, DEFAULT_GIT_BINARY, GitCloner,
    HttpRepositoryLister, ListerRetrier, LogObserver, ProjectHandle, RepositoryMirror,
    SequentialMirror, StdResult,
};

/// Command line arguments for the source mirror
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Identifier of the project whose repositories are mirrored
    #[arg(short, long, env = "SOURCE_MIRROR_PROJECT_ID", required_unless_present = "describe")]
    project_id: Option<String>,

    /// Bearer token used to list the repositories
    #[arg(
        short,
        long,
        env = "SOURCE_MIRROR_TOKEN",
        hide_env_values = true,
        required_unless_present = "describe"
    )]
    token: Option<String>,

    /// Directory the repositories are cloned into
    #[arg(
        short = 'd',
        long,
        env = "SOURCE_MIRROR_TARGET_DIRECTORY",
        required_unless_present = "describe"
    )]
    target_directory: Option<PathBuf>,

    /// Base URL of the listing service
    #[arg(long, default_value = CLOUD_SOURCE_ENDPOINT)]
    endpoint: String,

    /// Version-control binary used to clone
    #[arg(long, default_value = DEFAULT_GIT_BINARY)]
    git_binary: String,

    /// Maximum number of listing attempts (1 means no retry)
    #[arg(long, default_value_t = 1)]
    max_listing_attempts: u32,

    /// Base delay between listing attempts, in milliseconds
    #[arg(long, default_value_t = 500)]
    listing_retry_delay_ms: u64,

    /// Print the connection descriptor as JSON and exit
    #[arg(long)]
    describe: bool,
}

impl std::fmt::Debug for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Args")
            .field("project_id", &self.project_id)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("target_directory", &self.target_directory)
            .field("endpoint", &self.endpoint)
            .field("git_binary", &self.git_binary)
            .field("max_listing_attempts", &self.max_listing_attempts)
            .field("listing_retry_delay_ms", &self.listing_retry_delay_ms)
            .field("describe", &self.describe)
            .finish()
    }
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    if args.describe {
        println!(
            "{}",
            serde_json::to_string_pretty(&ConnectionDescriptor::default())?
        );
        return Ok(());
    }
    debug!("Arguments: {args:?}");

    let project = ProjectHandle::new(
        args.project_id
            .as_deref()
            .with_context(|| "Missing project identifier")?,
        args.token.as_deref().with_context(|| "Missing token")?,
    );
    let target_directory = args
        .target_directory
        .as_deref()
        .with_context(|| "Missing target directory")?;
    info!(
        "Starting mirror of project '{}' into '{}'",
        project.project_id(),
        target_directory.display()
    );

    let mirror = build_sequential_mirror(&args)?;
    let report = mirror.mirror(&project, target_directory).await?;
    info!("Mirror completed: {}", report.summary());

    Ok(())
}

fn build_sequential_mirror(args: &Args) -> StdResult<Arc<dyn RepositoryMirror>> {
    let lister = Arc::new(ListerRetrier::new(
        Arc::new(HttpRepositoryLister::try_new(&args.endpoint)?),
        args.max_listing_attempts,
        Duration::from_millis(args.listing_retry_delay_ms),
    ));
    let cloner = Arc::new(GitCloner::new(&args.git_binary));

    Ok(Arc::new(SequentialMirror::new(
        lister,
        cloner,
        Arc::new(LogObserver),
    )))
}
