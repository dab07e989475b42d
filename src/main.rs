use changelog_post::application::GeneratePostService;
use changelog_post::cli::{format_outcome, Cli};
use changelog_post::error::PostError;
use changelog_post::infrastructure::{
    CiOutput, Config, FileSystemRepository, GitDiffSource, SiteRepository,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing on stderr so stdout carries only the run summary
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "changelog_post=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PostError> {
    let repo = FileSystemRepository::new(cli.repo.clone());
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => repo.load_config()?,
    };
    let options = cli.generate_options(config);

    let diff_source = GitDiffSource::new(repo.root().to_path_buf());
    let service = GeneratePostService::new(repo, diff_source);
    let outcome = service.execute(&options)?;

    CiOutput::new(cli.github_output.clone()).write_all(&outcome.ci_pairs())?;
    println!("{}", format_outcome(&outcome, &options.changelog));

    Ok(())
}
