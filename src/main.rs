use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use triage::classify;
use triage::error::{AppError, AppResult};

#[derive(Parser)]
#[command(name = "triage", author, version, about = "Support ticket classification CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a ticket description into category and priority.
    Classify(ClassifyArgs),
}

#[derive(Args)]
struct ClassifyArgs {
    /// Free-text ticket description.
    description: String,
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(args) => run_classify(args).await,
    }
}

async fn run_classify(args: ClassifyArgs) -> AppResult<()> {
    let classification = classify(&args.description).await;

    let json = serde_json::to_string_pretty(&classification).map_err(|err| {
        AppError::Configuration(format!("failed to render classification: {err}"))
    })?;
    println!("{json}");

    Ok(())
}
