use crate::components::{Button, ButtonVariant};
use crate::env_variable_utils::{get_app_name, get_community_url};
use crate::router::Route;
use crate::utils::current_year;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let navigator = use_navigator();
    let app_name = get_app_name();
    let community_url = get_community_url();

    let on_start = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Tool);
        }
    });

    html! {
        <div class="min-h-screen flex flex-col bg-slate-50">
            <nav class="sticky top-0 z-50 bg-white/80 backdrop-blur-md border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between h-16 items-center">
                        <div class="flex items-center gap-2">
                            <div class="w-8 h-8 bg-indigo-600 rounded-lg flex items-center justify-center text-white font-bold">
                                { app_name.chars().next().unwrap_or('V').to_string() }
                            </div>
                            <span class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-indigo-600 to-purple-600">
                                { &app_name }
                            </span>
                        </div>
                        <a href={community_url.clone()} target="_blank" rel="noreferrer"
                           class="text-sm font-medium text-gray-600 hover:text-indigo-600 transition-colors hidden sm:block">
                            {"Join the Community"}
                        </a>
                    </div>
                </div>
            </nav>

            <main class="flex-grow">
                <div class="relative pt-16 pb-32 overflow-hidden">
                    <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                        <div class="text-center max-w-3xl mx-auto animate-slide-up">
                            <div class="inline-flex items-center px-4 py-2 rounded-full bg-indigo-50 text-indigo-700 text-sm font-medium mb-8">
                                <span class="flex h-2 w-2 rounded-full bg-indigo-600 mr-2"></span>
                                {"AI-Powered Analytics"}
                            </div>
                            <h1 class="text-5xl md:text-6xl font-extrabold text-slate-900 tracking-tight mb-8">
                                {"Master the Art of "}<br/>
                                <span class="text-indigo-600">{"Viral Content"}</span>
                            </h1>
                            <p class="text-xl text-slate-600 mb-10 leading-relaxed">
                                {"Analyze top-performing videos, extract hidden metadata, and generate winning strategies in seconds."}
                            </p>

                            <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                                <Button onclick={on_start} class="text-lg px-8 py-4">
                                    {"Launch Tool "}<i class="fa-solid fa-rocket ml-2"></i>
                                </Button>
                                <a href={community_url} target="_blank" rel="noreferrer" class="w-full sm:w-auto">
                                    <Button variant={ButtonVariant::Whatsapp} class="w-full sm:w-auto text-lg px-8 py-4">
                                        {"Join WhatsApp Channel "}<i class="fa-brands fa-whatsapp ml-2"></i>
                                    </Button>
                                </a>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="bg-white py-24">
                    <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                        <div class="grid md:grid-cols-3 gap-12">
                            <FeatureCard
                                icon="fa-magnifying-glass"
                                title="Deep Search"
                                description="Pull real-time video data to find trending videos in your niche instantly."
                            />
                            <FeatureCard
                                icon="fa-microchip"
                                title="AI Analysis"
                                description="Break down titles, tags, and stats to understand why a video went viral."
                            />
                            <FeatureCard
                                icon="fa-lightbulb"
                                title="Smart Strategy"
                                description="Get generated hooks, titles, and SEO keywords tailored to beat the competition."
                            />
                        </div>
                    </div>
                </div>
            </main>

            <footer class="bg-slate-50 border-t border-gray-200 py-12">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <p class="text-gray-500">
                        { format!("© {} {}. All rights reserved.", current_year(), app_name) }
                    </p>
                </div>
            </footer>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="p-8 rounded-2xl bg-slate-50 border border-slate-100 hover:shadow-xl transition-shadow duration-300 text-center group">
            <div class="w-16 h-16 bg-white rounded-2xl shadow-sm flex items-center justify-center mx-auto mb-6 group-hover:scale-110 transition-transform duration-300">
                <i class={classes!("fa-solid", props.icon.to_string(), "text-2xl", "text-indigo-600")}></i>
            </div>
            <h3 class="text-xl font-bold text-slate-900 mb-3">{ props.title.clone() }</h3>
            <p class="text-slate-600 leading-relaxed">{ props.description.clone() }</p>
        </div>
    }
}
