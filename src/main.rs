use accounts::Accounts;
use analyzer::{AnalysisRequest, Analyzer};
use clap::Parser;
use cli::{Cli, Command};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod accounts;
mod analyzer;
mod cli;
mod downloader;
mod images;
mod keywords;
mod links;
mod parser;
mod report;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let analyzer = Analyzer::new(&cli.fetch_config())?;

    match cli.command {
        Command::Analyze {
            url,
            keywords,
            json,
        } => {
            let request = AnalysisRequest::from_csv(url, &keywords);
            let analysis = analyzer.analyze(&request).await;

            if let Some(e) = &analysis.error {
                error!("Analysis of {} failed: {}", request.url(), e);
                eprintln!("An error occurred while fetching the page: {}", e);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis.result)?);
            } else {
                println!("{}", analysis.result);
            }

            if analysis.error.is_some() {
                std::process::exit(1);
            }
        }
        Command::Serve { port, accounts } => {
            server::server(analyzer, Accounts::new(accounts), port).await;
        }
    }

    Ok(())
}
