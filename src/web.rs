//! The http server and its one route.

use axum::{extract::Query, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    config::Config,
    extract::{self, TitleResult},
    imdb,
};

pub async fn run(config: Config) -> eyre::Result<()> {
    let app = router();

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("listening on http://{}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/search", get(search))
        .layer(TraceLayer::new_for_http())
}

#[derive(Deserialize)]
struct SearchParams {
    q: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum SearchResponse {
    Results {
        query: String,
        count: usize,
        results: Vec<TitleResult>,
    },
    // transport failures still respond 200, the error just moves into the
    // body. matches what clients of the original api expect.
    Error {
        error: String,
    },
}

async fn search(Query(params): Query<SearchParams>) -> impl IntoResponse {
    let outcome = imdb::fetch(&params.q).await;
    Json(search_response(params.q, outcome))
}

fn search_response(query: String, outcome: eyre::Result<String>) -> SearchResponse {
    match outcome {
        Ok(body) => {
            let results = extract::parse_response(&body);
            SearchResponse::Results {
                query,
                count: results.len(),
                results,
            }
        }
        Err(err) => {
            warn!("imdb request for {query:?} failed: {err}");
            SearchResponse::Error {
                error: err.to_string(),
            }
        }
    }
}
