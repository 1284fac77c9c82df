use crate::error::ApiError;
use crate::models::{ContentPackage, VideoDetail};
use crate::tool::api::{TextProvider, VideoProvider};
use crate::tool::content::generate_content_package;
use crate::tool::session::SessionAction;

/// Runs a search and turns the outcome into the completion action for `query`.
pub async fn run_search<V>(videos: &V, query: String) -> SessionAction
where
    V: VideoProvider + ?Sized,
{
    match videos.search(&query).await {
        Ok(results) => {
            log::info!("Search for \"{query}\" returned {} videos", results.len());
            SessionAction::SearchSucceeded { query, results }
        }
        Err(e) => {
            log::error!("{e}");
            SessionAction::SearchFailed {
                query,
                message: e.user_message().to_string(),
            }
        }
    }
}

async fn analyze<V, T>(
    videos: &V,
    text: &T,
    id: &str,
) -> Result<(VideoDetail, ContentPackage), ApiError>
where
    V: VideoProvider + ?Sized,
    T: TextProvider + ?Sized,
{
    let detail = videos.get_details(id).await?;
    let package = generate_content_package(text, &detail).await?;
    Ok((detail, package))
}

/// Fetches details, then generates the package. Nothing partial is returned:
/// either both steps succeeded for `id`, or the action reports a failure.
pub async fn run_analysis<V, T>(videos: &V, text: &T, id: String) -> SessionAction
where
    V: VideoProvider + ?Sized,
    T: TextProvider + ?Sized,
{
    match analyze(videos, text, &id).await {
        Ok((detail, package)) => {
            log::info!("Generated content package for video {id}");
            SessionAction::AnalysisSucceeded {
                id,
                detail,
                package,
            }
        }
        Err(e) => {
            log::error!("Analysis of video {id} failed: {e}");
            SessionAction::AnalysisFailed {
                id,
                message: e.user_message().to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DETAIL_FAILED_MESSAGE, GENERATION_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE};
    use crate::models::{ChannelInfo, VideoStats, VideoSummary};
    use crate::tool::session::SessionState;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeVideos {
        results: Vec<VideoSummary>,
        fail_search: bool,
        fail_details: bool,
        calls: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl VideoProvider for FakeVideos {
        async fn search(&self, query: &str) -> Result<Vec<VideoSummary>, ApiError> {
            self.calls.borrow_mut().push(format!("search:{query}"));
            if self.fail_search {
                return Err(ApiError::Search("HTTP 500".to_string()));
            }
            Ok(self.results.clone())
        }

        async fn get_details(&self, id: &str) -> Result<VideoDetail, ApiError> {
            self.calls.borrow_mut().push(format!("details:{id}"));
            if self.fail_details {
                return Err(ApiError::Detail("HTTP 404".to_string()));
            }
            Ok(VideoDetail {
                id: id.to_string(),
                title: "Cats being cats".to_string(),
                channel: ChannelInfo {
                    name: "Cat TV".to_string(),
                    subscribers: "1M".to_string(),
                    url: "https://youtube.com/@cattv".to_string(),
                },
                stats: VideoStats {
                    views: "1,234,567".to_string(),
                    likes: "50K".to_string(),
                    date: "Mar 3, 2024".to_string(),
                },
                tags: vec!["cats".to_string(), "funny".to_string()],
                description: "Cats.".to_string(),
            })
        }
    }

    struct FakeText {
        reply: Result<String, ApiError>,
        prompts: RefCell<Vec<String>>,
    }

    impl FakeText {
        fn replying(body: &str) -> Self {
            Self {
                reply: Ok(body.to_string()),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(ApiError::Generation("HTTP 503".to_string())),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl TextProvider for FakeText {
        async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.reply.clone()
        }
    }

    const FULL_BODY: &str = "===SEO_TITLE===\nCats Gone Wild #shorts #cats\n===DESCRIPTION===\nThe funniest cats.\n===KEYWORDS===\ncats, funny cats, kittens\n===VEO_SCRIPT===\nScene: a cat leaps onto a shelf.";

    fn summary(id: &str, title: &str) -> VideoSummary {
        VideoSummary {
            kind: "video".to_string(),
            id: id.to_string(),
            title: title.to_string(),
            channel: "Cat TV".to_string(),
            views: "1.2M".to_string(),
            published: "2 years ago".to_string(),
            duration: "3:14".to_string(),
            thumbnail: format!("https://i.ytimg.com/vi/{id}/hq720.jpg"),
        }
    }

    fn step(state: SessionState, action: SessionAction) -> SessionState {
        state.apply(action).expect("transition accepted")
    }

    #[test]
    fn search_failure_maps_to_generic_message() {
        let videos = FakeVideos {
            fail_search: true,
            ..Default::default()
        };
        let action = block_on(run_search(&videos, "cats".to_string()));
        assert_eq!(
            action,
            SessionAction::SearchFailed {
                query: "cats".to_string(),
                message: SEARCH_FAILED_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn detail_failure_skips_generation() {
        let videos = FakeVideos {
            fail_details: true,
            ..Default::default()
        };
        let text = FakeText::replying(FULL_BODY);

        let action = block_on(run_analysis(&videos, &text, "a".to_string()));

        assert_eq!(
            action,
            SessionAction::AnalysisFailed {
                id: "a".to_string(),
                message: DETAIL_FAILED_MESSAGE.to_string(),
            }
        );
        assert!(text.prompts.borrow().is_empty());
    }

    #[test]
    fn generation_failure_discards_fetched_detail() {
        let videos = FakeVideos::default();
        let text = FakeText::failing();

        let action = block_on(run_analysis(&videos, &text, "a".to_string()));

        assert_eq!(
            action,
            SessionAction::AnalysisFailed {
                id: "a".to_string(),
                message: GENERATION_FAILED_MESSAGE.to_string(),
            }
        );
        assert_eq!(*videos.calls.borrow(), vec!["details:a".to_string()]);
    }

    #[test]
    fn search_select_analyze_and_back() {
        let videos = FakeVideos {
            results: vec![summary("v1", "Cat jumps"), summary("v2", "Cat sleeps")],
            ..Default::default()
        };
        let text = FakeText::replying(FULL_BODY);

        let state = step(
            SessionState::default(),
            SessionAction::SubmitQuery("cat videos".to_string()),
        );
        let state = step(state, block_on(run_search(&videos, "cat videos".to_string())));
        let SessionState::Results { ref results, .. } = state else {
            panic!("expected results, got {state:?}");
        };
        assert_eq!(results.len(), 2);
        let original_results = results.clone();

        let state = step(state, SessionAction::SelectVideo("v1".to_string()));
        assert_eq!(state.analyzing(), Some("v1"));

        // A second selection while v1 is outstanding changes nothing.
        assert_eq!(state.apply(SessionAction::SelectVideo("v2".to_string())), None);

        let state = step(state, block_on(run_analysis(&videos, &text, "v1".to_string())));
        let SessionState::Analysis {
            ref detail,
            ref package,
            ..
        } = state
        else {
            panic!("expected analysis, got {state:?}");
        };
        assert_eq!(detail.id, "v1");
        assert_eq!(detail.tags, vec!["cats", "funny"]);
        assert_eq!(package.seo_title, "Cats Gone Wild #shorts #cats");
        assert_eq!(package.keywords, "cats, funny cats, kittens");
        assert_eq!(package.veo_script, "Scene: a cat leaps onto a shelf.");
        assert!(text.prompts.borrow()[0].contains("tags: [cats, funny]"));
        assert_eq!(
            *videos.calls.borrow(),
            vec!["search:cat videos".to_string(), "details:v1".to_string()]
        );

        let state = step(state, SessionAction::BackToResults);
        assert_eq!(
            state,
            SessionState::Results {
                query: "cat videos".to_string(),
                results: original_results,
                analyzing: None,
                error: None,
            }
        );
    }
}
