//! Extraction of title results from the `__NEXT_DATA__` blob that IMDb
//! embeds in its server-rendered pages.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

static NEXT_DATA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script#__NEXT_DATA__").unwrap());

/// Where the title results live inside the blob. If imdb reshuffles their
/// page data, this is the only place that needs updating.
const RESULTS_PATH: &[&str] = &["props", "pageProps", "titleResults", "results"];

/// One search match. Nothing in the upstream blob is guaranteed, so every
/// field is best-effort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleResult {
    pub id: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub cast: Vec<Value>,
    pub poster: Option<String>,
}

/// Pull the title results out of a search-results page. Never fails: a
/// missing script tag, unparseable json, or a moved key path all yield an
/// empty list, since the page format is imdb's to change whenever they like.
pub fn parse_response(body: &str) -> Vec<TitleResult> {
    let dom = Html::parse_document(body);

    let Some(script) = dom.select(&NEXT_DATA_SELECTOR).next() else {
        debug!("no __NEXT_DATA__ script in page");
        return Vec::new();
    };

    let data = match serde_json::from_str::<Value>(&script.inner_html()) {
        Ok(data) => data,
        Err(err) => {
            warn!("__NEXT_DATA__ is not valid json: {err}");
            return Vec::new();
        }
    };

    let Some(titles) = lookup(&data, RESULTS_PATH).and_then(Value::as_array) else {
        warn!("__NEXT_DATA__ is missing {}", RESULTS_PATH.join("."));
        return Vec::new();
    };

    titles.iter().map(project_title).collect()
}

/// Walk a nested key path, returning `None` as soon as any key is absent or
/// the value at hand isn't an object.
fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |value, key| value.get(key))
}

fn project_title(title: &Value) -> TitleResult {
    TitleResult {
        id: string_field(title, "id"),
        title: string_field(title, "titleNameText"),
        year: string_field(title, "titleReleaseText"),
        cast: title
            .get("topCredits")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        poster: title
            .get("titlePosterImageModel")
            .and_then(|model| model.get("url"))
            .and_then(Value::as_str)
            .map(str::to_owned),
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}
