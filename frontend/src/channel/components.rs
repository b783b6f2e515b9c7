use crate::app::use_gateway;
use crate::channel::api::{fetch_channel_overview, ChannelOverview};
use crate::hooks::use_fenced_load;
use crate::load::Loadable;
use crate::router::Route;
use crate::search::components::ErrorNotice;
use crate::utils::{channel_url, format_compact, format_iso8601_date, format_number, watch_url};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChannelPageProps {
    pub channel_id: String,
}

fn overview(overview: &ChannelOverview) -> Html {
    let stats = &overview.stats;
    let analysis = &overview.analysis;
    html! {
        <>
            <div class="flex items-center gap-4">
                <img src={stats.thumbnail_url.clone()} alt={stats.title.clone()} class="w-20 h-20 rounded-full" />
                <div>
                    <h1 class="text-2xl font-bold">
                        <a href={channel_url(&stats.channel_id)} target="_blank" class="hover:underline">{ &stats.title }</a>
                    </h1>
                    <p class="text-sm text-gray-600">{ format!("Since {}", format_iso8601_date(&stats.created_at)) }</p>
                </div>
            </div>
            <div class="text-sm flex flex-wrap gap-4 mt-3">
                <span>{ format!("👥 {} subscribers", format_number(stats.subscriber_count)) }</span>
                <span>{ format!("🎬 {} videos", format_number(stats.video_count)) }</span>
                <span>{ format!("👁️ {} views", format_number(stats.view_count)) }</span>
            </div>
            <p class="whitespace-pre-wrap text-sm mt-3">{ &stats.description }</p>

            <h2 class="text-lg font-semibold mt-6 mb-2">
                { format!("Latest {} videos", analysis.video_count) }
            </h2>
            <p class="text-sm text-gray-600 mb-2">
                { format!(
                    "Averages: {} views · {} likes · {} comments",
                    format_compact(analysis.averages.view_count.round() as u64),
                    format_compact(analysis.averages.like_count.round() as u64),
                    format_compact(analysis.averages.comment_count.round() as u64),
                ) }
            </p>
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left border-b">
                        <th>{"Title"}</th><th>{"Published"}</th><th>{"Length"}</th>
                        <th>{"Views"}</th><th>{"Likes"}</th><th>{"Comments"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for analysis.videos.iter().map(|video| html! {
                        <tr class="border-b">
                            <td>
                                <a href={watch_url(&video.video_id)} target="_blank" class="text-blue-600 hover:underline">
                                    { video.title.clone().unwrap_or_else(|| video.video_id.clone()) }
                                </a>
                            </td>
                            <td>{ video.published_at.as_deref().map(format_iso8601_date).unwrap_or_default() }</td>
                            <td>{ video.display_duration() }</td>
                            <td>{ format_number(video.view_count) }</td>
                            <td>{ format_number(video.like_count) }</td>
                            <td>{ format_number(video.comment_count) }</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </>
    }
}

#[function_component(ChannelPage)]
pub fn channel_page(props: &ChannelPageProps) -> Html {
    let gateway = use_gateway();
    let (channel, retry) = use_fenced_load(props.channel_id.clone(), move |channel_id: String| async move {
        fetch_channel_overview(gateway.client(), &channel_id).await
    });

    let content = match &*channel {
        Loadable::Idle | Loadable::Loading => html! { <p class="text-gray-500">{"Loading channel..."}</p> },
        Loadable::Failed(error) => html! {
            <ErrorNotice message={error.user_message()} on_retry={retry} />
        },
        Loadable::Ready(channel) => overview(channel),
    };

    html! {
        <div class="container mx-auto p-4">
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                {"← Back to search"}
            </Link<Route>>
            <section class="bg-white rounded-lg shadow p-4 mt-4">{ content }</section>
        </div>
    }
}
