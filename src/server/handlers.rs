use std::convert::Infallible;

use super::{AnalysisReply, Submission};
use crate::{accounts::Accounts, analyzer::Analyzer};
use serde::Serialize;
use tracing::{info, warn};
use warp::http::StatusCode;

#[derive(Debug, Serialize)]
struct Error {
    error: String,
}

/// Handle a submission. Rejects with 401 when the account gate is closed for the given
/// credentials, otherwise runs the analysis.
/// A failed fetch still produces the zeroed result, with `502 Bad Gateway` and the error message.
pub(super) async fn submit(
    submission: Submission,
    analyzer: Analyzer,
    accounts: Accounts,
) -> Result<impl warp::Reply, Infallible> {
    if !accounts.admits(
        submission.username.as_deref(),
        submission.password.as_deref(),
    ) {
        warn!("Rejected submission for {}: invalid credentials", submission.url);
        return Ok(warp::reply::with_status(
            warp::reply::json(&Error {
                error: "invalid credentials".to_string(),
            }),
            StatusCode::UNAUTHORIZED,
        ));
    }

    let analysis = analyzer
        .submit(&submission.url, &submission.keywords)
        .await;

    let status = match analysis.error {
        Some(_) => StatusCode::BAD_GATEWAY,
        None => StatusCode::OK,
    };
    info!("Served analysis of {} with {}", submission.url, status);

    let reply = AnalysisReply {
        result: analysis.result,
        error: analysis
            .error
            .map(|e| format!("An error occurred while fetching the page: {}", e)),
    };

    Ok(warp::reply::with_status(warp::reply::json(&reply), status))
}
