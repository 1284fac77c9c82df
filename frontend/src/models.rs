use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub count: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<VideoSummary>,
}

impl SearchResponse {
    /// Provider order is kept; entries without a usable id are dropped.
    pub fn into_summaries(self) -> Vec<VideoSummary> {
        let total = self.results.len();
        let summaries: Vec<VideoSummary> = self
            .results
            .into_iter()
            .filter(|summary| !summary.id.trim().is_empty())
            .collect();

        if summaries.len() < total {
            log::warn!(
                "Dropped {} search result(s) without an id",
                total - summaries.len()
            );
        }
        summaries
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subscribers: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoStats {
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub likes: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDetail {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel: ChannelInfo,
    #[serde(default)]
    pub stats: VideoStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPackage {
    pub seo_title: String,
    pub description: String,
    pub keywords: String,
    pub veo_script: String,
    pub raw: String,
}

// Providers send `null` for empty collections now and then.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_decodes_provider_payload() {
        let body = r#"{
            "query": "cat videos",
            "count": 2,
            "results": [
                {"type": "video", "id": "abc123", "title": "Cats", "channel": "Cat TV",
                 "views": "1.2M views", "published": "2 years ago", "duration": "3:14",
                 "thumbnail": "https://i.ytimg.com/vi/abc123/hq720.jpg"},
                {"type": "video", "id": "def456", "title": "More cats", "channel": "Cat TV",
                 "views": "15,320 views", "published": "1 day ago", "duration": "0:59",
                 "thumbnail": "https://i.ytimg.com/vi/def456/hq720.jpg"}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.count, 2);

        let summaries = response.into_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "abc123");
        assert_eq!(summaries[0].kind, "video");
        assert_eq!(summaries[1].duration, "0:59");
    }

    #[test]
    fn missing_or_null_results_decode_as_empty() {
        let missing: SearchResponse = serde_json::from_str(r#"{"query": "x"}"#).unwrap();
        assert!(missing.results.is_empty());

        let null: SearchResponse =
            serde_json::from_str(r#"{"query": "x", "count": 0, "results": null}"#).unwrap();
        assert!(null.into_summaries().is_empty());
    }

    #[test]
    fn result_without_id_field_is_undecodable() {
        let body = r#"{"query": "x", "count": 1, "results": [{"title": "no id"}]}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }

    #[test]
    fn blank_ids_are_dropped_in_order() {
        let body = r#"{"results": [{"id": "a"}, {"id": "  "}, {"id": "b"}]}"#;
        let summaries = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_summaries();
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn detail_tolerates_absent_and_null_tags() {
        let absent: VideoDetail = serde_json::from_str(
            r#"{"id": "abc", "title": "T",
                "channel": {"name": "C", "subscribers": "10K", "url": "https://youtube.com/@c"},
                "stats": {"views": "100", "likes": "5", "date": "Jan 1, 2024"},
                "description": "d"}"#,
        )
        .unwrap();
        assert!(absent.tags.is_empty());
        assert_eq!(absent.channel.subscribers, "10K");

        let null: VideoDetail =
            serde_json::from_str(r#"{"id": "abc", "title": "T", "tags": null}"#).unwrap();
        assert!(null.tags.is_empty());
        assert_eq!(null.stats, VideoStats::default());
    }
}
