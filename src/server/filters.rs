use warp::Filter;

use super::handlers;
use crate::{accounts::Accounts, analyzer::Analyzer};

fn with_analyzer(
    analyzer: Analyzer,
) -> impl Filter<Extract = (Analyzer,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || analyzer.clone())
}

fn with_accounts(
    accounts: Accounts,
) -> impl Filter<Extract = (Accounts,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || accounts.clone())
}

/// POST /analyses with JSON body
pub(super) fn submit(
    analyzer: Analyzer,
    accounts: Accounts,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("analyses")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(16 * 1024))
        .and(warp::body::json())
        .and(with_analyzer(analyzer))
        .and(with_accounts(accounts))
        .and_then(handlers::submit)
}
