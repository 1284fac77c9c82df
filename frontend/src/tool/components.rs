use crate::components::{Button, ButtonVariant};
use crate::env_variable_utils::get_community_url;
use crate::models::{ContentPackage, VideoDetail, VideoSummary};
use crate::utils::{copy_to_clipboard, format_views, sleep_ms, thumbnail_url};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const COPIED_RESET_MS: i32 = 2000;
const MAX_SOURCE_TAGS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub loading: bool,
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(|| props.query.clone());

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_search.emit((*current_input).clone());
        })
    };

    let submit_disabled = props.loading || current_input.trim().is_empty();

    html! {
        <div class="max-w-2xl mx-auto mt-20 text-center animate-slide-up">
            <div class="w-20 h-20 bg-indigo-100 rounded-2xl flex items-center justify-center mx-auto mb-8">
                <i class="fa-solid fa-wand-magic-sparkles text-3xl text-indigo-600"></i>
            </div>
            <h2 class="text-3xl font-bold text-slate-900 mb-4">{"What do you want to analyze?"}</h2>
            <p class="text-slate-500 mb-8">{"Enter a keyword, topic, or niche to find viral opportunities."}</p>

            <form onsubmit={on_submit} class="relative">
                <input
                    type="text"
                    class="w-full px-6 py-4 text-lg border-2 border-gray-200 rounded-xl focus:border-indigo-500 focus:ring-0 outline-none shadow-sm transition-all"
                    placeholder="e.g., 'AI ASMR', 'Minecraft Speedrun', 'Tech Reviews'"
                    value={(*current_input).clone()}
                    oninput={on_input}
                    disabled={props.loading}
                />
                <button
                    type="submit"
                    disabled={submit_disabled}
                    class="absolute right-2 top-2 bottom-2 bg-indigo-600 text-white px-6 rounded-lg font-medium hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed transition-all"
                >
                    { if props.loading { html! { <i class="fa-solid fa-spinner fa-spin"></i> } } else { html! { "Search" } } }
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsGridProps {
    pub results: Vec<VideoSummary>,
    pub analyzing: Option<String>,
    pub on_select: Callback<String>,
    pub on_new_search: Callback<MouseEvent>,
}

#[function_component(ResultsGrid)]
pub fn results_grid(props: &ResultsGridProps) -> Html {
    let busy = props.analyzing.is_some();

    html! {
        <div class="animate-fade-in">
            <div class="flex justify-between items-center mb-6">
                <p class="text-slate-500">{ format!("Found {} videos", props.results.len()) }</p>
                <button onclick={props.on_new_search.clone()} class="text-sm text-indigo-600 hover:text-indigo-800 font-medium">
                    {"New Search"}
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for props.results.iter().map(|video| html! {
                    <ResultCard
                        key={video.id.clone()}
                        video={video.clone()}
                        analyzing={props.analyzing.as_deref() == Some(video.id.as_str())}
                        disabled={busy}
                        on_select={props.on_select.clone()}
                    />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub video: VideoSummary,
    pub analyzing: bool,
    pub disabled: bool,
    pub on_select: Callback<String>,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let id = props.video.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };
    let video = &props.video;

    html! {
        <div class="bg-white rounded-xl shadow-sm hover:shadow-md transition-shadow duration-200 overflow-hidden border border-gray-100 flex flex-col relative group">
            {
                if props.analyzing {
                    html! {
                        <div class="absolute inset-0 bg-white/90 backdrop-blur-sm z-20 flex flex-col items-center justify-center text-center p-4 animate-fade-in rounded-xl">
                            <div class="w-12 h-12 border-4 border-indigo-200 border-t-indigo-600 rounded-full animate-spin mb-3"></div>
                            <p class="font-semibold text-indigo-900">{"Generating Strategy..."}</p>
                            <p class="text-sm text-indigo-600/80">{"Analyzing viral patterns"}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="relative aspect-video bg-gray-200">
                <img src={video.thumbnail.clone()} alt={video.title.clone()} class="w-full h-full object-cover" />
                <div class="absolute bottom-2 right-2 bg-black/70 text-white text-xs px-2 py-1 rounded">
                    { &video.duration }
                </div>
            </div>
            <div class="p-4 flex-grow flex flex-col">
                <h3 class="font-semibold text-slate-900 line-clamp-2 mb-2" title={video.title.clone()}>
                    { &video.title }
                </h3>
                <p class="text-sm text-slate-500 mb-1">{ &video.channel }</p>
                <div class="flex items-center gap-3 text-xs text-gray-400 mb-4">
                    <span><i class="fa-solid fa-eye mr-1"></i>{ format_views(&video.views) }</span>
                    <span>{"•"}</span>
                    <span>{ &video.published }</span>
                </div>

                <div class="mt-auto pt-4 border-t border-gray-100">
                    <Button onclick={onclick} disabled={props.disabled} full_width=true class="text-sm py-2">
                        {
                            if props.analyzing {
                                html! { <><i class="fa-solid fa-spinner fa-spin mr-2"></i>{"Analyzing..."}</> }
                            } else {
                                html! { <><i class="fa-solid fa-wand-magic-sparkles mr-2"></i>{"Generate Content"}</> }
                            }
                        }
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnalysisViewProps {
    pub detail: VideoDetail,
    pub package: ContentPackage,
    pub on_back: Callback<MouseEvent>,
}

#[function_component(AnalysisView)]
pub fn analysis_view(props: &AnalysisViewProps) -> Html {
    let package = &props.package;

    html! {
        <div class="animate-fade-in max-w-7xl mx-auto pb-12">
            <button onclick={props.on_back.clone()} class="mb-6 text-sm text-gray-500 hover:text-indigo-600 flex items-center gap-2">
                <i class="fa-solid fa-arrow-left"></i>{"Back to results"}
            </button>

            <SourceCard detail={props.detail.clone()} />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <ContentCard
                    title="SEO Optimized Title"
                    icon="fa-heading"
                    copy_label="Copy Title"
                    text={package.seo_title.clone()}
                    class="lg:col-span-3"
                    large=true
                />
                <ContentCard
                    title="Description & Hashtags"
                    icon="fa-align-left"
                    copy_label="Copy"
                    text={package.description.clone()}
                    class="lg:col-span-2"
                />
                <ContentCard
                    title="Keywords"
                    icon="fa-tags"
                    copy_label="Copy"
                    text={package.keywords.clone()}
                    class="lg:col-span-1"
                    monospace=true
                    footnote="Comma-separated for easy pasting"
                />
                <ContentCard
                    title="8s AI Video Script (Hook)"
                    icon="fa-film"
                    copy_label="Copy Script"
                    text={package.veo_script.clone()}
                    class="lg:col-span-3"
                    monospace=true
                />
            </div>

            <div class="mt-8 flex justify-center">
                <a href={get_community_url()} target="_blank" rel="noreferrer">
                    <Button variant={ButtonVariant::Whatsapp} class="text-sm py-2 px-6 shadow-none">
                        <i class="fa-brands fa-whatsapp mr-2"></i>{"Join Channel for More Tools"}
                    </Button>
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SourceCardProps {
    pub detail: VideoDetail,
}

#[function_component(SourceCard)]
pub fn source_card(props: &SourceCardProps) -> Html {
    let detail = &props.detail;

    html! {
        <div class="bg-white rounded-2xl p-6 border border-gray-200 shadow-sm mb-8 flex flex-col md:flex-row gap-6">
            <div class="w-full md:w-80 flex-shrink-0">
                <div class="aspect-video rounded-xl overflow-hidden shadow-md relative">
                    <img src={thumbnail_url(&detail.id)} alt={detail.title.clone()} class="w-full h-full object-cover" />
                </div>
            </div>
            <div class="flex-grow flex flex-col justify-center">
                <div class="flex flex-wrap items-center gap-3 mb-3 text-sm">
                    <span class="bg-indigo-50 text-indigo-700 px-3 py-1 rounded-full font-semibold text-xs border border-indigo-100">
                        <i class="fa-solid fa-bolt mr-1"></i>{"Analyzed Source"}
                    </span>
                    <span class="text-gray-400">{"|"}</span>
                    <span class="text-gray-500"><i class="fa-regular fa-calendar mr-1"></i>{ &detail.stats.date }</span>
                    <span class="text-gray-400">{"|"}</span>
                    <span class="text-gray-500"><i class="fa-solid fa-eye mr-1"></i>{ format!("{} views", detail.stats.views) }</span>
                </div>

                <h2 class="text-2xl font-bold text-slate-900 mb-2 leading-snug">{ &detail.title }</h2>

                <div class="flex items-center gap-2 mb-4">
                    <div class="w-8 h-8 rounded-full bg-gray-100 flex items-center justify-center text-gray-500">
                        <i class="fa-solid fa-user"></i>
                    </div>
                    <span class="font-semibold text-slate-700">{ &detail.channel.name }</span>
                </div>

                <div class="flex flex-wrap gap-2">
                    { for detail.tags.iter().take(MAX_SOURCE_TAGS).map(|tag| html! {
                        <span key={tag.clone()} class="text-xs text-gray-500 bg-gray-100 px-2 py-1 rounded border border-gray-200">
                            { format!("#{tag}") }
                        </span>
                    })}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentCardProps {
    pub title: AttrValue,
    pub icon: AttrValue,
    pub copy_label: AttrValue,
    pub text: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub large: bool,
    #[prop_or_default]
    pub monospace: bool,
    #[prop_or_default]
    pub footnote: Option<AttrValue>,
}

#[function_component(ContentCard)]
pub fn content_card(props: &ContentCardProps) -> Html {
    let copied = use_state(|| false);

    let on_copy = {
        let copied = copied.clone();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let text = text.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match copy_to_clipboard(&text).await {
                    Ok(()) => {
                        copied.set(true);
                        sleep_ms(COPIED_RESET_MS).await;
                        copied.set(false);
                    }
                    Err(e) => log::warn!("{e}"),
                }
            });
        })
    };

    let body_classes = classes!(
        "whitespace-pre-wrap",
        "leading-relaxed",
        "text-slate-700",
        props.large.then_some("text-2xl font-bold text-slate-800"),
        props.monospace.then_some("font-mono text-sm")
    );

    html! {
        <div class={classes!("bg-gradient-to-br", "from-indigo-50", "to-white", "rounded-2xl", "border", "border-indigo-100", "shadow-lg", "overflow-hidden", "flex", "flex-col", props.class.clone())}>
            <div class="bg-indigo-600 px-6 py-4 flex items-center justify-between">
                <h3 class="text-white font-bold text-lg flex items-center gap-2">
                    <i class={classes!("fa-solid", props.icon.to_string())}></i>{ props.title.clone() }
                </h3>
                <button
                    onclick={on_copy}
                    class="text-indigo-100 hover:text-white text-sm bg-indigo-700/50 hover:bg-indigo-700 px-3 py-1 rounded transition-colors"
                >
                    {
                        if *copied {
                            html! { <><i class="fa-solid fa-check mr-1"></i>{"Copied"}</> }
                        } else {
                            html! { <><i class="fa-regular fa-copy mr-1"></i>{ props.copy_label.clone() }</> }
                        }
                    }
                </button>
            </div>
            <div class="p-8 flex-grow">
                <div class={body_classes}>{ &props.text }</div>
                {
                    if let Some(footnote) = &props.footnote {
                        html! { <p class="mt-3 text-xs text-gray-400 text-center">{ footnote.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
