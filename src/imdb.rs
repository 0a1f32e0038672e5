//! The single outbound call to IMDb's find page.

use std::{sync::LazyLock, time::Duration};

use url::Url;

pub const BASE_URL: &str = "https://www.imdb.com/find/";

// imdb serves an empty shell to clients it doesn't recognize as browsers
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

pub static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap()
});

pub fn request(query: &str) -> reqwest::RequestBuilder {
    let url = Url::parse_with_params(BASE_URL, &[("q", query)]).unwrap();
    CLIENT.get(url)
}

/// Fetch the search-results page for `query`. One attempt, no retries;
/// non-2xx statuses count as failures the same as transport errors.
pub async fn fetch(query: &str) -> eyre::Result<String> {
    fetch_with(request(query)).await
}

pub(crate) async fn fetch_with(request: reqwest::RequestBuilder) -> eyre::Result<String> {
    let response = request.send().await?.error_for_status()?;
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_binds_query_to_q() {
        let request = request("borbaad").build().unwrap();
        assert_eq!(request.url().as_str(), "https://www.imdb.com/find/?q=borbaad");
    }

    #[test]
    fn request_percent_encodes_the_query() {
        let request = request("the room 2003").build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://www.imdb.com/find/?q=the+room+2003"
        );
    }

    #[tokio::test]
    async fn connection_refused_is_an_error_not_a_panic() {
        // nothing listens on port 9, so this fails at connect time
        let err = fetch_with(CLIENT.get("http://127.0.0.1:9/find/"))
            .await
            .unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
