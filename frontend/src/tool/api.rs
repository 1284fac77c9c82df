use crate::env_variable_utils::{AI_API_URL, SEARCH_API_URL};
use crate::error::ApiError;
use crate::models::{SearchResponse, VideoDetail, VideoSummary};
use async_trait::async_trait;
use gloo_net::http::Request;

/// Search and detail lookups against the video provider.
#[async_trait(?Send)]
pub trait VideoProvider {
    async fn search(&self, query: &str) -> Result<Vec<VideoSummary>, ApiError>;
    async fn get_details(&self, id: &str) -> Result<VideoDetail, ApiError>;
}

/// Free-text completion: one prompt in, one plain-text body out.
#[async_trait(?Send)]
pub trait TextProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError>;
}

pub fn search_url(base_url: &str, query: &str) -> String {
    format!("{base_url}/search?q={}", urlencoding::encode(query))
}

pub fn details_url(base_url: &str, video_id: &str) -> String {
    format!("{base_url}/details?id={}", urlencoding::encode(video_id))
}

pub fn completion_url(base_url: &str, prompt: &str) -> String {
    format!("{base_url}/?q={}", urlencoding::encode(prompt))
}

pub struct HttpVideoProvider {
    base_url: String,
}

impl HttpVideoProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&*SEARCH_API_URL)
    }
}

/// Rejects a non-2xx reply with `err`. The message keeps the status and, when
/// present, the start of the body.
pub fn check_status(
    ok: bool,
    status: u16,
    body: &str,
    err: fn(String) -> ApiError,
) -> Result<(), ApiError> {
    if ok {
        return Ok(());
    }
    let body = body.trim();
    if body.is_empty() {
        Err(err(format!("HTTP {status}")))
    } else {
        let snippet: String = body.chars().take(200).collect();
        Err(err(format!("HTTP {status} - {snippet}")))
    }
}

pub fn decode_search(body: &str) -> Result<Vec<VideoSummary>, ApiError> {
    serde_json::from_str::<SearchResponse>(body)
        .map(SearchResponse::into_summaries)
        .map_err(|e| ApiError::Search(format!("Failed to parse response: {e}")))
}

pub fn decode_details(body: &str) -> Result<VideoDetail, ApiError> {
    serde_json::from_str::<VideoDetail>(body)
        .map_err(|e| ApiError::Detail(format!("Failed to parse video details: {e}")))
}

/// Sends a GET and returns the status flag, code and body text. Transport and
/// body-read failures are mapped through `err`.
async fn fetch_text(
    url: &str,
    err: fn(String) -> ApiError,
) -> Result<(bool, u16, String), ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| err(format!("Network error: {e}")))?;

    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| err(format!("Failed to read response body: {e}")))?;

    Ok((ok, status, body))
}

#[async_trait(?Send)]
impl VideoProvider for HttpVideoProvider {
    async fn search(&self, query: &str) -> Result<Vec<VideoSummary>, ApiError> {
        let url = search_url(&self.base_url, query);
        log::info!("Searching videos for \"{query}\"");

        let (ok, status, body) = fetch_text(&url, ApiError::Search).await?;
        check_status(ok, status, &body, ApiError::Search)?;
        decode_search(&body)
    }

    async fn get_details(&self, id: &str) -> Result<VideoDetail, ApiError> {
        let url = details_url(&self.base_url, id);
        log::info!("Fetching details for video {id}");

        let (ok, status, body) = fetch_text(&url, ApiError::Detail).await?;
        check_status(ok, status, &body, ApiError::Detail)?;
        decode_details(&body)
    }
}

pub struct HttpTextProvider {
    base_url: String,
}

impl HttpTextProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&*AI_API_URL)
    }
}

#[async_trait(?Send)]
impl TextProvider for HttpTextProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        let url = completion_url(&self.base_url, prompt);
        log::debug!("Requesting completion ({} prompt bytes)", prompt.len());

        let (ok, status, body) = fetch_text(&url, ApiError::Generation).await?;
        check_status(ok, status, &body, ApiError::Generation)?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_is_percent_encoded() {
        assert_eq!(
            search_url("https://search.example", "cat videos & more"),
            "https://search.example/search?q=cat%20videos%20%26%20more"
        );
    }

    #[test]
    fn opaque_ids_are_percent_encoded() {
        assert_eq!(
            details_url("https://search.example", "a/b?c=d&e"),
            "https://search.example/details?id=a%2Fb%3Fc%3Dd%26e"
        );
        assert_eq!(
            details_url("https://search.example", "dQw4w9WgXcQ"),
            "https://search.example/details?id=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn prompt_line_breaks_survive_encoding() {
        let url = completion_url("https://ai.example", "line one\n===SEO_TITLE===");
        assert_eq!(
            url,
            "https://ai.example/?q=line%20one%0A%3D%3D%3DSEO_TITLE%3D%3D%3D"
        );
    }

    #[test]
    fn success_status_passes() {
        assert_eq!(check_status(true, 200, "{}", ApiError::Search), Ok(()));
    }

    #[test]
    fn error_status_maps_to_the_caller_kind() {
        assert_eq!(
            check_status(false, 500, "", ApiError::Search),
            Err(ApiError::Search("HTTP 500".to_string()))
        );
        assert_eq!(
            check_status(false, 404, "  ", ApiError::Detail),
            Err(ApiError::Detail("HTTP 404".to_string()))
        );
        assert_eq!(
            check_status(false, 503, "busy", ApiError::Generation),
            Err(ApiError::Generation("HTTP 503 - busy".to_string()))
        );
    }

    #[test]
    fn long_error_bodies_are_cut() {
        let body = "x".repeat(1000);
        let Err(ApiError::Generation(message)) =
            check_status(false, 502, &body, ApiError::Generation)
        else {
            panic!("expected a generation failure");
        };
        assert_eq!(message.len(), "HTTP 502 - ".len() + 200);
    }

    #[test]
    fn search_body_decodes_and_drops_blank_ids() {
        let body = r#"{"query": "cats", "count": 2, "results": [
            {"type": "video", "id": "abc", "title": "Cats"},
            {"type": "video", "id": " ", "title": "Ghost"}
        ]}"#;
        let results = decode_search(body).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "abc");
    }

    #[test]
    fn malformed_search_body_is_a_search_failure() {
        assert!(matches!(decode_search("<html>oops</html>"), Err(ApiError::Search(_))));
        assert!(matches!(decode_search(""), Err(ApiError::Search(_))));
    }

    #[test]
    fn search_entry_without_id_is_a_search_failure() {
        let body = r#"{"results": [{"type": "video", "title": "No id"}]}"#;
        assert!(matches!(decode_search(body), Err(ApiError::Search(_))));
    }

    #[test]
    fn details_body_decodes() {
        let detail = decode_details(r#"{"id": "abc", "title": "Cats", "tags": ["a", "b"]}"#).unwrap();
        assert_eq!(detail.id, "abc");
        assert_eq!(detail.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn malformed_details_body_is_a_detail_failure() {
        assert!(matches!(decode_details("not json"), Err(ApiError::Detail(_))));
        assert!(matches!(
            decode_details(r#"{"title": "No id"}"#),
            Err(ApiError::Detail(_))
        ));
    }
}
