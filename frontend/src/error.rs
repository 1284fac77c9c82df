pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch search results. Please try again.";
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to fetch video details. Please try again.";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate content. The API might be busy.";

/// Upstream failures. The detail string is only ever logged; the view gets
/// [`ApiError::user_message`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("search failed: {0}")]
    Search(String),

    #[error("detail lookup failed: {0}")]
    Detail(String),

    #[error("generation failed: {0}")]
    Generation(String),
}

impl ApiError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Search(_) => SEARCH_FAILED_MESSAGE,
            ApiError::Detail(_) => DETAIL_FAILED_MESSAGE,
            ApiError::Generation(_) => GENERATION_FAILED_MESSAGE,
        }
    }
}
