use anyhow::Result;
use clap::Parser;

use git_release::command::SystemRunner;
use git_release::config::{self, ReleaseConfig};
use git_release::pipeline::ReleasePipeline;
use git_release::ui::Reporter;

#[derive(clap::Parser)]
#[command(
    name = "git-release",
    version,
    about = "Simple opinionated release tooling for monorepos"
)]
struct Args {
    #[arg(
        long,
        env = "RELEASE_PATH",
        help = "Root directory scanned for changelog entries and containing the notes file"
    )]
    dir: Option<String>,

    #[arg(
        long,
        env = "RELEASE_NOTES_PATH",
        help = "Relative path of the release notes file"
    )]
    notes: Option<String>,

    #[arg(
        long,
        env = "RELEASE_PROJECT",
        help = "Project name for release notes and release commits (e.g. project-name)"
    )]
    project: Option<String>,

    #[arg(
        long,
        env = "RELEASE_TAG",
        help = "Tag name for release notes and release commits (e.g. v2024.12.01)"
    )]
    tag: Option<String>,

    #[arg(
        long,
        env = "RELEASE_DRY_RUN",
        help = "Report intended actions without mutating the repository"
    )]
    dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let reporter = Reporter::console();

    let file_config = match config::load_file_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            reporter.error(&format!("Error loading config: {:#}", e));
            std::process::exit(1);
        }
    };

    let release_config = match ReleaseConfig::resolve(
        args.dir,
        args.notes,
        args.project,
        args.tag,
        args.dry_run,
        &file_config,
    ) {
        Ok(cfg) => cfg,
        Err(e) => {
            reporter.error(&e.to_string());
            std::process::exit(1);
        }
    };

    let dry_run = release_config.dry_run;
    let pipeline = ReleasePipeline::new(release_config);

    if let Err(e) = pipeline.run(&SystemRunner, &reporter) {
        reporter.error(&e.to_string());
        std::process::exit(1);
    }

    if dry_run {
        reporter.success(&format!("Dry run complete for {}", pipeline.identifier()));
    } else {
        reporter.success(&format!("Created release {}", pipeline.identifier()));
    }

    Ok(())
}
