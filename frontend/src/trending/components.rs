use crate::load::Loadable;
use crate::models::{VideoCategory, VideoRecord};
use crate::search::components::{ErrorNotice, VideoCard};
use crate::search::filter_panel::event_value;
use web_sys::Event;
use yew::prelude::*;

const REGIONS: [(&str, &str); 10] = [
    ("US", "United States"),
    ("KR", "South Korea"),
    ("JP", "Japan"),
    ("GB", "United Kingdom"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("CN", "China"),
    ("IN", "India"),
];

#[derive(Properties, PartialEq)]
pub struct RegionPickerProps {
    pub region: Option<String>,
    pub category: Option<String>,
    pub categories: Loadable<Vec<VideoCategory>>,
    pub on_region_change: Callback<Option<String>>,
    pub on_category_change: Callback<Option<String>>,
    pub on_retry_categories: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct TrendingVideosProps {
    pub trending: Loadable<Vec<VideoRecord>>,
    pub region: Option<String>,
    pub category: Option<String>,
    pub on_retry: Callback<()>,
}

// An empty option value stands for "no selection".
fn selection(e: &Event) -> Option<String> {
    event_value(e).filter(|value| !value.is_empty())
}

#[function_component(RegionPicker)]
pub fn region_picker(props: &RegionPickerProps) -> Html {
    let on_region_change = {
        let on_region_change = props.on_region_change.clone();
        Callback::from(move |e: Event| on_region_change.emit(selection(&e)))
    };
    let on_category_change = {
        let on_category_change = props.on_category_change.clone();
        Callback::from(move |e: Event| on_category_change.emit(selection(&e)))
    };

    let current_region = props.region.clone().unwrap_or_default();
    let current_category = props.category.clone().unwrap_or_default();

    let category_select = match &props.categories {
        Loadable::Failed(error) => html! {
            <ErrorNotice message={error.user_message()} on_retry={props.on_retry_categories.clone()} />
        },
        categories => {
            let loading = categories.is_loading();
            let options = categories.ready().cloned().unwrap_or_default();
            html! {
                <select value={current_category.clone()} onchange={on_category_change} disabled={loading}>
                    <option value="" selected={current_category.is_empty()}>
                        { if loading { "Loading categories..." } else { "All categories" } }
                    </option>
                    { for options.into_iter().map(|category| {
                        let selected = category.id == current_category;
                        html! {
                            <option value={category.id.clone()} {selected}>{ category.title }</option>
                        }
                    })}
                </select>
            }
        }
    };

    html! {
        <div class="flex flex-wrap gap-6 mb-4">
            <label class="search-option">
                { "Region" }
                <select value={current_region.clone()} onchange={on_region_change}>
                    <option value="" selected={current_region.is_empty()}>{"All regions"}</option>
                    { for REGIONS.iter().map(|(code, name)| html! {
                        <option value={*code} selected={*code == current_region}>
                            { format!("{name} ({code})") }
                        </option>
                    })}
                </select>
            </label>
            <label class="search-option">
                { "Category" }
                { category_select }
            </label>
        </div>
    }
}

#[function_component(TrendingVideos)]
pub fn trending_videos(props: &TrendingVideosProps) -> Html {
    let heading = {
        let mut heading = String::from("Trending");
        if let Some(region) = &props.region {
            heading.push_str(&format!(" in {region}"));
        }
        if let Some(category) = &props.category {
            heading.push_str(&format!(" (category {category})"));
        }
        heading
    };

    let body = match &props.trending {
        Loadable::Idle => return html! {},
        Loadable::Ready(videos) if videos.is_empty() => return html! {},
        Loadable::Loading => html! { <p class="text-gray-500">{"Loading..."}</p> },
        Loadable::Failed(error) => html! {
            <ErrorNotice message={error.user_message()} on_retry={props.on_retry.clone()} />
        },
        Loadable::Ready(videos) => html! {
            <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-5 gap-4">
                { for videos.iter().map(|video| html! {
                    <VideoCard key={video.id.clone()} video={video.clone()} />
                })}
            </div>
        },
    };

    html! {
        <section class="mb-8">
            <h2 class="text-xl font-semibold mb-3">{ heading }</h2>
            { body }
        </section>
    }
}
