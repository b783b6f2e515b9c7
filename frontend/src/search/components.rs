use crate::load::Loadable;
use crate::models::VideoRecord;
use crate::router::Route;
use crate::search::ratio::classify;
use crate::utils::{
    format_compact, format_iso8601_date, format_number, format_ratio, truncate_chars, watch_url,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub loading: bool,
    pub on_search: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: String,
    pub on_retry: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoRecord,
}

const TABLE_DESCRIPTION_CHARS: usize = 100;
const TABLE_TAG_COUNT: usize = 3;

/// How the result list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub fn display_name(self) -> &'static str {
        match self {
            ViewMode::Cards => "Cards",
            ViewMode::Table => "Table",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![ViewMode::Cards, ViewMode::Table]
    }
}

/// First few tags plus a `+N` marker for the rest, or `-` when there are none.
pub fn tag_summary(tags: Option<&[String]>, shown: usize) -> String {
    let tags = tags.unwrap_or_default();
    if tags.is_empty() {
        return "-".to_string();
    }
    let mut summary = tags.iter().take(shown).cloned().collect::<Vec<_>>().join(", ");
    if tags.len() > shown {
        summary.push_str(&format!(" +{}", tags.len() - shown));
    }
    summary
}

#[derive(Properties, PartialEq)]
pub struct VideoTableProps {
    pub videos: Vec<VideoRecord>,
}

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub results: Loadable<Vec<VideoRecord>>,
    pub on_retry: Callback<()>,
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
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let query = current_input.trim();
            if !query.is_empty() {
                on_search.emit(query.to_string());
            }
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex mb-4">
            <input
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Search YouTube videos..."
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button
                type="submit"
                class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                disabled={props.loading || current_input.trim().is_empty()}
            >
                { if props.loading { "Searching..." } else { "Search" } }
            </button>
        </form>
    }
}

#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    let on_click = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };

    html! {
        <div class="bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg flex justify-between items-center">
            <p>{ &props.message }</p>
            <button onclick={on_click} class="px-3 py-1 text-sm bg-red-600 text-white rounded hover:bg-red-700">
                {"Retry"}
            </button>
        </div>
    }
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let bucket = classify(video.view_subscriber_ratio);

    html! {
        <div class="bg-white rounded-lg shadow overflow-hidden flex flex-col">
            <div class="relative">
                <img src={video.thumbnail.clone()} alt={video.title.clone()} class="w-full" />
                <span class="absolute bottom-1 right-1 bg-black text-white text-xs px-1 rounded">
                    { &video.duration }
                </span>
            </div>
            <div class="p-3 flex-grow">
                <h3 class="font-semibold text-gray-800 line-clamp-2" title={video.title.clone()}>
                    { &video.title }
                </h3>
                <p class="text-sm mt-1">
                    <Link<Route> to={Route::Channel { id: video.channel_id.clone() }} classes="text-blue-600 hover:underline">
                        { &video.channel_title }
                    </Link<Route>>
                    {
                        if let Some(country) = &video.channel_country {
                            html! { <span class="text-gray-500">{ format!(" ({country})") }</span> }
                        } else {
                            html! {}
                        }
                    }
                </p>
                <div class="text-xs text-gray-600 mt-2 flex flex-wrap gap-3">
                    <span title={format_number(video.view_count)}>{ format!("👁️ {}", format_compact(video.view_count)) }</span>
                    <span>{ format!("👍 {}", format_compact(video.like_count)) }</span>
                    <span>{ format!("👥 {}", format_compact(video.subscriber_count)) }</span>
                    <span>{ format!("📅 {}", format_iso8601_date(&video.published_at)) }</span>
                </div>
                <p class="text-xs mt-2">
                    <span class={classes!("px-2", "py-0.5", "rounded", format!("ratio-level-{}", bucket.level()))}>
                        { format!("Views/subs {} · level {}", format_ratio(video.view_subscriber_ratio), bucket.level()) }
                    </span>
                </p>
            </div>
            <div class="p-3 border-t flex gap-3 text-sm">
                <Link<Route> to={Route::Video { id: video.id.clone() }} classes="text-blue-600 hover:underline">
                    {"Details"}
                </Link<Route>>
                <a href={watch_url(&video.id)} target="_blank" class="text-blue-600 hover:underline">
                    {"Watch ↗"}
                </a>
            </div>
        </div>
    }
}

fn table_row(video: &VideoRecord) -> Html {
    html! {
        <tr key={video.id.clone()} class="border-b align-top">
            <td><img src={video.thumbnail.clone()} alt={video.title.clone()} class="w-24" /></td>
            <td>
                <Link<Route> to={Route::Video { id: video.id.clone() }} classes="font-semibold hover:underline">
                    { &video.title }
                </Link<Route>>
                if !video.description.is_empty() {
                    <p class="text-xs text-gray-500" title={video.description.clone()}>
                        { truncate_chars(&video.description, TABLE_DESCRIPTION_CHARS) }
                    </p>
                }
            </td>
            <td>
                <Link<Route> to={Route::Channel { id: video.channel_id.clone() }} classes="text-blue-600 hover:underline">
                    { &video.channel_title }
                </Link<Route>>
            </td>
            <td>{ video.channel_country.clone().unwrap_or_else(|| "-".to_string()) }</td>
            <td>{ format_iso8601_date(&video.published_at) }</td>
            <td class="text-right">{ format_compact(video.view_count) }</td>
            <td class="text-right">{ format_compact(video.like_count) }</td>
            <td>{ &video.duration }</td>
            <td class="text-right">{ format_compact(video.subscriber_count) }</td>
            <td class="text-right">{ format_ratio(video.view_subscriber_ratio) }</td>
            <td class="text-xs">{ tag_summary(video.tags.as_deref(), TABLE_TAG_COUNT) }</td>
            <td><a href={watch_url(&video.id)} target="_blank" class="text-blue-600 hover:underline">{"Watch ↗"}</a></td>
        </tr>
    }
}

#[function_component(VideoTable)]
pub fn video_table(props: &VideoTableProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="w-full text-sm bg-white">
                <thead>
                    <tr class="text-left border-b">
                        <th>{"Thumbnail"}</th><th>{"Title"}</th><th>{"Channel"}</th><th>{"Country"}</th>
                        <th>{"Published"}</th><th>{"Views"}</th><th>{"Likes"}</th><th>{"Length"}</th>
                        <th>{"Subscribers"}</th><th>{"Views/subs"}</th><th>{"Tags"}</th><th>{"Link"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.videos.iter().map(table_row) }
                </tbody>
            </table>
        </div>
    }
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    let view_mode = use_state(ViewMode::default);

    match &props.results {
        Loadable::Idle => html! {},
        Loadable::Loading => html! {
            <p class="text-center text-gray-500 mt-8">{"Searching..."}</p>
        },
        Loadable::Failed(error) => html! {
            <div class="mt-8">
                <ErrorNotice message={error.user_message()} on_retry={props.on_retry.clone()} />
            </div>
        },
        Loadable::Ready(videos) if videos.is_empty() => html! {
            <p class="text-center text-gray-500 mt-8">{"No videos matched your filters."}</p>
        },
        Loadable::Ready(videos) => {
            let toggles = ViewMode::all_variants().into_iter().map(|mode| {
                let class = if mode == *view_mode {
                    "px-2 py-1 rounded bg-blue-600 text-white"
                } else {
                    "px-2 py-1 rounded bg-gray-200"
                };
                let view_mode = view_mode.clone();
                let onclick = Callback::from(move |_: MouseEvent| view_mode.set(mode));
                html! { <button {class} {onclick}>{ mode.display_name() }</button> }
            });
            let body = match *view_mode {
                ViewMode::Cards => html! {
                    <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-4 gap-4">
                        { for videos.iter().map(|video| html! {
                            <VideoCard key={video.id.clone()} video={video.clone()} />
                        })}
                    </div>
                },
                ViewMode::Table => html! { <VideoTable videos={videos.clone()} /> },
            };

            html! {
                <div class="mt-8">
                    <div class="flex justify-between items-center mb-2">
                        <p class="text-sm text-gray-600">{ format!("{} videos", videos.len()) }</p>
                        <div class="flex gap-2 text-sm">{ for toggles }</div>
                    </div>
                    { body }
                </div>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|tag| tag.to_string()).collect()
    }

    #[test]
    fn cards_are_the_default_view() {
        assert_eq!(ViewMode::default(), ViewMode::Cards);
        assert_eq!(ViewMode::all_variants(), vec![ViewMode::Cards, ViewMode::Table]);
    }

    #[test]
    fn tag_summary_shows_the_first_tags_and_a_remainder() {
        assert_eq!(tag_summary(None, 3), "-");
        assert_eq!(tag_summary(Some(tags(&[]).as_slice()), 3), "-");
        assert_eq!(tag_summary(Some(tags(&["a", "b"]).as_slice()), 3), "a, b");
        assert_eq!(
            tag_summary(Some(tags(&["a", "b", "c", "d", "e"]).as_slice()), 3),
            "a, b, c +2"
        );
    }
}
