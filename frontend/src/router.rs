use crate::app::use_gateway;
use crate::channel::components::ChannelPage;
use crate::env_variable_utils::get_app_name;
use crate::search::api::run_search;
use crate::search::components::{SearchBar, VideoList};
use crate::search::filter_panel::FilterPanel;
use crate::search::filters::FilterCriteria;
use crate::search::state::{SearchAction, SearchState};
use crate::trending::api::{run_category_fetch, run_trending_fetch};
use crate::trending::cascade::{CascadeAction, CascadeState};
use crate::trending::components::{RegionPicker, TrendingVideos};
use crate::video::components::VideoPage;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/video/:id")]
    Video { id: String },
    #[at("/channel/:id")]
    Channel { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <SearchApp /> },
        Route::Video { id } => html! { <VideoPage video_id={id} /> },
        Route::Channel { id } => html! { <ChannelPage channel_id={id} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to search"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(SearchApp)]
pub fn search_app() -> Html {
    let gateway = use_gateway();
    let app_name = use_state(get_app_name);
    let search = use_reducer(SearchState::default);
    let cascade = {
        let fallback_region = gateway.client().config().fallback_region.clone();
        use_reducer(move || CascadeState::new(fallback_region))
    };

    // Each effect runs once per dispatched request; the reducers drop any
    // reply whose ticket has been superseded in the meantime.
    {
        let gateway = gateway.clone();
        let dispatcher = search.dispatcher();
        use_effect_with(search.invocation().cloned(), move |invocation| {
            if let Some(invocation) = invocation.clone() {
                spawn_local(async move {
                    dispatcher.dispatch(run_search(gateway.client(), invocation).await);
                });
            }
            || ()
        });
    }
    {
        let gateway = gateway.clone();
        let dispatcher = cascade.dispatcher();
        use_effect_with(cascade.category_fetch().cloned(), move |fetch| {
            if let Some(fetch) = fetch.clone() {
                spawn_local(async move {
                    dispatcher.dispatch(run_category_fetch(gateway.client(), fetch).await);
                });
            }
            || ()
        });
    }
    {
        let gateway = gateway.clone();
        let dispatcher = cascade.dispatcher();
        use_effect_with(cascade.trending_fetch().cloned(), move |fetch| {
            if let Some(fetch) = fetch.clone() {
                spawn_local(async move {
                    dispatcher.dispatch(run_trending_fetch(gateway.client(), fetch).await);
                });
            }
            || ()
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |query: String| search.dispatch(SearchAction::Submit(query)))
    };
    let on_retry_search = {
        let search = search.clone();
        Callback::from(move |_: ()| search.dispatch(SearchAction::Retry))
    };
    let on_criteria_change = {
        let search = search.clone();
        Callback::from(move |criteria: FilterCriteria| {
            search.dispatch(SearchAction::SetCriteria(criteria))
        })
    };
    let on_region_change = {
        let cascade = cascade.clone();
        Callback::from(move |region: Option<String>| cascade.dispatch(CascadeAction::SetRegion(region)))
    };
    let on_category_change = {
        let cascade = cascade.clone();
        Callback::from(move |category: Option<String>| {
            cascade.dispatch(CascadeAction::SetCategory(category))
        })
    };
    let on_retry_categories = {
        let cascade = cascade.clone();
        Callback::from(move |_: ()| cascade.dispatch(CascadeAction::RetryCategories))
    };
    let on_retry_trending = {
        let cascade = cascade.clone();
        Callback::from(move |_: ()| cascade.dispatch(CascadeAction::RetryTrending))
    };

    let query = search
        .invocation()
        .map(|invocation| invocation.query.clone())
        .unwrap_or_default();
    let region = cascade.region().map(str::to_string);
    let category = cascade.category().map(str::to_string);

    html! {
        <div class="min-h-screen bg-gray-100">
            <header class="bg-red-600 text-white p-4">
                <h1 class="text-2xl font-bold">{ (*app_name).clone() }</h1>
            </header>
            <main class="container mx-auto p-4">
                <SearchBar {query} loading={search.results().is_loading()} {on_search} />
                <FilterPanel criteria={search.criteria().clone()} on_change={on_criteria_change} />
                <RegionPicker
                    region={region.clone()}
                    category={category.clone()}
                    categories={cascade.categories().clone()}
                    {on_region_change}
                    {on_category_change}
                    {on_retry_categories}
                />
                <TrendingVideos
                    trending={cascade.trending().clone()}
                    {region}
                    {category}
                    on_retry={on_retry_trending}
                />
                <VideoList results={search.results().clone()} on_retry={on_retry_search} />
            </main>
        </div>
    }
}
