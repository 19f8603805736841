//! Command-line interface definitions.
//!
//! Options shared by every subcommand configure the HTTP client; they can also be
//! set through environment variables.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::{accounts::Account, downloader::FetchConfig};

#[derive(Parser, Debug)]
#[command(
    name = "seo-analyzer",
    about = "Fetch a web page and report links, image alt coverage and keywords",
    version,
    long_about = None
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    /// HTTP request timeout in milliseconds (no timeout when unset)
    #[arg(long, env = "SEO_TIMEOUT_MS", global = true)]
    pub(crate) timeout_ms: Option<u64>,

    /// User-Agent header sent with the request
    #[arg(long, env = "SEO_USER_AGENT", global = true)]
    pub(crate) user_agent: Option<String>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Analyze one page and print the report
    Analyze {
        /// Page to analyze
        url: String,

        /// Comma-separated keywords to look for
        #[arg(short, long, default_value = "")]
        keywords: String,

        /// Print the result as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Serve analyses over HTTP on POST /analyses
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3030)]
        port: u16,

        /// Account allowed to submit, as `username:password` (repeatable)
        #[arg(long = "account", env = "SEO_ACCOUNTS", value_delimiter = ',')]
        accounts: Vec<Account>,
    },
}

impl Cli {
    pub(crate) fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: self.timeout_ms.map(Duration::from_millis),
            user_agent: self.user_agent.clone(),
        }
    }
}
