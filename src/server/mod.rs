mod filters;
mod handlers;

use serde::{Deserialize, Serialize};

use tokio::{signal::{self, unix::SignalKind}, sync::broadcast};
use tracing::{info, warn};

use crate::{accounts::Accounts, analyzer::{AnalysisResult, Analyzer}};

/// Used to parse JSON body of the POST /analyses request.
/// `keywords` is the comma-separated list as typed by the user.
#[derive(Debug, Serialize, Deserialize)]
struct Submission {
    url: String,
    #[serde(default)]
    keywords: String,
    username: Option<String>,
    password: Option<String>,
}

/// Body returned for a submission. On a failed fetch `result` is zeroed and `error` is set.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReply {
    #[serde(flatten)]
    result: AnalysisResult,
    error: Option<String>,
}

/// Create the webserver and start serving the routes.
pub(crate) async fn server(analyzer: Analyzer, accounts: Accounts, port: u16) {
    let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);

    if accounts.is_open() {
        warn!("No accounts configured, submissions are not authenticated");
    }

    let routes = filters::submit(analyzer, accounts);

    tokio::spawn(async move {
        let mut sigterm = match signal::unix::signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                warn!("Cannot listen for SIGTERM: {}", e);
                return;
            }
        };
        let mut sigquit = match signal::unix::signal(SignalKind::quit()) {
            Ok(s) => s,
            Err(e) => {
                warn!("Cannot listen for SIGQUIT: {}", e);
                return;
            }
        };
        let kill = signal::ctrl_c();

        let send_kill = move || {
            info!("Received shutdown signal. Sending shutdown command.");
            let _ = shutdown_tx.send(());
        };
        tokio::select! {
            _ = sigterm.recv() => send_kill(),
            _ = sigquit.recv() => send_kill(),
            _ = kill => send_kill(),
        }
    });

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], port), async move {
        shutdown_rx.recv().await.ok();
    });
    info!("Listening on {}", addr);

    server.await
}
