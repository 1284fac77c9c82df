use crate::models::{ContentPackage, VideoDetail, VideoSummary};
use std::rc::Rc;
use yew::functional::Reducible;

/// What the tool page is showing. Each variant only carries data that is
/// valid for it.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Search {
        query: String,
        loading: bool,
        error: Option<String>,
    },
    Results {
        query: String,
        results: Vec<VideoSummary>,
        analyzing: Option<String>,
        error: Option<String>,
    },
    Analysis {
        query: String,
        results: Vec<VideoSummary>,
        detail: VideoDetail,
        package: ContentPackage,
    },
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Search {
            query: String::new(),
            loading: false,
            error: None,
        }
    }
}

/// Completions carry the query or video id they were issued for, so a reply
/// that arrives after the user moved on is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SubmitQuery(String),
    SearchSucceeded {
        query: String,
        results: Vec<VideoSummary>,
    },
    SearchFailed {
        query: String,
        message: String,
    },
    SelectVideo(String),
    AnalysisSucceeded {
        id: String,
        detail: VideoDetail,
        package: ContentPackage,
    },
    AnalysisFailed {
        id: String,
        message: String,
    },
    NewSearch,
    BackToResults,
}

impl SessionState {
    /// Next state for `action`, or `None` when a guard rejects it.
    pub fn apply(&self, action: SessionAction) -> Option<SessionState> {
        use SessionAction::*;
        use SessionState::*;

        match (self, action) {
            (Search { loading: false, .. }, SubmitQuery(query)) => {
                let query = query.trim().to_string();
                if query.is_empty() {
                    return None;
                }
                Some(Search {
                    query,
                    loading: true,
                    error: None,
                })
            }
            (
                Search {
                    query,
                    loading: true,
                    ..
                },
                SearchSucceeded {
                    query: answered,
                    results,
                },
            ) if *query == answered => Some(Results {
                query: answered,
                results,
                analyzing: None,
                error: None,
            }),
            (
                Search {
                    query,
                    loading: true,
                    ..
                },
                SearchFailed {
                    query: answered,
                    message,
                },
            ) if *query == answered => Some(Search {
                query: answered,
                loading: false,
                error: Some(message),
            }),
            (
                Results {
                    query,
                    results,
                    analyzing: None,
                    ..
                },
                SelectVideo(id),
            ) if results.iter().any(|video| video.id == id) => Some(Results {
                query: query.clone(),
                results: results.clone(),
                analyzing: Some(id),
                error: None,
            }),
            (
                Results {
                    query,
                    results,
                    analyzing: Some(current),
                    ..
                },
                AnalysisSucceeded {
                    id,
                    detail,
                    package,
                },
            ) if *current == id => Some(Analysis {
                query: query.clone(),
                results: results.clone(),
                detail,
                package,
            }),
            (
                Results {
                    query,
                    results,
                    analyzing: Some(current),
                    ..
                },
                AnalysisFailed { id, message },
            ) if *current == id => Some(Results {
                query: query.clone(),
                results: results.clone(),
                analyzing: None,
                error: Some(message),
            }),
            (Results { .. }, NewSearch) => Some(SessionState::default()),
            (Analysis { query, results, .. }, BackToResults) => Some(Results {
                query: query.clone(),
                results: results.clone(),
                analyzing: None,
                error: None,
            }),
            (_, action) => {
                log::debug!("Ignoring {action:?} in current state");
                None
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Search { loading: true, .. })
    }

    pub fn analyzing(&self) -> Option<&str> {
        match self {
            SessionState::Results { analyzing, .. } => analyzing.as_deref(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SessionState::Search { error, .. } | SessionState::Results { error, .. } => {
                error.as_deref()
            }
            SessionState::Analysis { .. } => None,
        }
    }

    pub fn title(&self) -> String {
        match self {
            SessionState::Search { .. } => "Dashboard".to_string(),
            SessionState::Results { query, .. } => format!("Results for \"{query}\""),
            SessionState::Analysis { .. } => "Generated Content Package".to_string(),
        }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

/// A request a callback has sent and not yet heard back from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Search(String),
    Analysis(String),
}

/// Tracks the one outstanding request. The reducer handle a callback captured
/// still shows the state from the last render, so two fast clicks both pass
/// `apply`; this slot is shared across renders and catches the second one.
#[derive(Debug, Default)]
pub struct InFlight {
    current: Option<PendingRequest>,
}

impl InFlight {
    pub fn try_begin(&mut self, request: PendingRequest) -> bool {
        if let Some(current) = &self.current {
            log::debug!("Skipping {request:?}, still waiting on {current:?}");
            return false;
        }
        self.current = Some(request);
        true
    }

    /// Only clears the slot if `request` is still the one being tracked.
    pub fn finish(&mut self, request: &PendingRequest) {
        if self.current.as_ref() == Some(request) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
