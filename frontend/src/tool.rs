pub mod api;
pub mod components;
pub mod content;
pub mod session;
pub mod workflow;

use crate::components::ErrorBanner;
use crate::env_variable_utils::get_community_url;
use crate::router::Route;
use crate::tool::api::{HttpTextProvider, HttpVideoProvider};
use crate::tool::components::{AnalysisView, ResultsGrid, SearchBar};
use crate::tool::session::{InFlight, PendingRequest, SessionAction, SessionState};
use crate::tool::workflow::{run_analysis, run_search};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ToolPage)]
pub fn tool_page() -> Html {
    let session = use_reducer(SessionState::default);
    let in_flight = use_mut_ref(InFlight::default);

    let on_search = {
        let session = session.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |query: String| {
            let start = SessionAction::SubmitQuery(query);
            let Some(SessionState::Search { query, .. }) = session.apply(start.clone()) else {
                return;
            };
            let request = PendingRequest::Search(query.clone());
            if !in_flight.borrow_mut().try_begin(request.clone()) {
                return;
            }
            session.dispatch(start);

            let session = session.clone();
            let in_flight = in_flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let videos = HttpVideoProvider::from_env();
                session.dispatch(run_search(&videos, query).await);
                in_flight.borrow_mut().finish(&request);
            });
        })
    };

    let on_select = {
        let session = session.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |id: String| {
            let start = SessionAction::SelectVideo(id.clone());
            if session.apply(start.clone()).is_none() {
                return;
            }
            let request = PendingRequest::Analysis(id.clone());
            if !in_flight.borrow_mut().try_begin(request.clone()) {
                return;
            }
            session.dispatch(start);

            let session = session.clone();
            let in_flight = in_flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let videos = HttpVideoProvider::from_env();
                let text = HttpTextProvider::from_env();
                session.dispatch(run_analysis(&videos, &text, id).await);
                in_flight.borrow_mut().finish(&request);
            });
        })
    };

    let on_new_search = {
        let session = session.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |_: MouseEvent| {
            in_flight.borrow_mut().clear();
            session.dispatch(SessionAction::NewSearch);
        })
    };

    let on_back = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::BackToResults))
    };

    let body = match &*session {
        SessionState::Search { query, .. } => html! {
            <SearchBar query={query.clone()} loading={session.is_loading()} on_search={on_search} />
        },
        SessionState::Results { results, .. } => html! {
            <ResultsGrid
                results={results.clone()}
                analyzing={session.analyzing().map(str::to_string)}
                on_select={on_select}
                on_new_search={on_new_search}
            />
        },
        SessionState::Analysis {
            detail, package, ..
        } => html! {
            <AnalysisView detail={detail.clone()} package={package.clone()} on_back={on_back} />
        },
    };

    html! {
        <div class="min-h-screen bg-slate-50 flex flex-col">
            <header class="bg-white border-b border-gray-200 sticky top-0 z-40">
                <div class="max-w-7xl mx-auto px-4 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-4">
                        <Link<Route> to={Route::Home} classes="text-gray-500 hover:text-indigo-600 transition-colors">
                            <i class="fa-solid fa-arrow-left text-lg"></i>
                        </Link<Route>>
                        <h1 class="font-bold text-lg text-slate-800">{ session.title() }</h1>
                    </div>
                    <a href={get_community_url()} target="_blank" rel="noreferrer"
                       class="bg-[#25D366] text-white p-2 rounded-full hover:bg-[#128C7E] transition-colors">
                        <i class="fa-brands fa-whatsapp"></i>
                    </a>
                </div>
            </header>

            <main class="flex-grow p-4 sm:p-6 lg:p-8 max-w-7xl mx-auto w-full">
                <ErrorBanner error_message={session.error().map(str::to_string)} />
                { body }
            </main>
        </div>
    }
}
