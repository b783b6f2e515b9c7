use crate::app::use_gateway;
use crate::gateway::requests::{CommentOrder, CommentsRequest};
use crate::hooks::use_fenced_load;
use crate::load::Loadable;
use crate::models::{VideoAnalysis, VideoComment};
use crate::router::Route;
use crate::search::components::ErrorNotice;
use crate::transcript::components::TranscriptPanel;
use crate::utils::{format_compact, format_iso8601_date, format_iso8601_duration, watch_url};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoPageProps {
    pub video_id: String,
}

#[function_component(VideoPage)]
pub fn video_page(props: &VideoPageProps) -> Html {
    html! {
        <div class="container mx-auto p-4">
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                {"← Back to search"}
            </Link<Route>>
            <div class="mt-4">
                <AnalysisPanel video_id={props.video_id.clone()} />
                <TranscriptPanel video_id={props.video_id.clone()} />
                <CommentsPanel video_id={props.video_id.clone()} />
            </div>
        </div>
    }
}

fn analysis_summary(analysis: &VideoAnalysis) -> Html {
    let data = &analysis.data;
    let stats = &data.statistics;
    html! {
        <>
            <h1 class="text-2xl font-bold">
                <a href={watch_url(&analysis.video_id)} target="_blank" class="hover:underline">{ &analysis.title }</a>
            </h1>
            <p class="text-gray-600">{ &analysis.channel_title }</p>
            <div class="text-sm flex flex-wrap gap-4 mt-2">
                <span>{ format!("📅 {}", format_iso8601_date(&data.published_at)) }</span>
                <span>{ format!("⏱️ {}", format_iso8601_duration(&stats.duration)) }</span>
                <span>{ format!("👁️ {}", format_compact(stats.view_count)) }</span>
                <span>{ format!("👍 {}", format_compact(stats.like_count)) }</span>
                <span>{ format!("💬 {}", format_compact(stats.comment_count)) }</span>
            </div>
            if !data.tags.is_empty() {
                <p class="text-xs text-gray-500 mt-2">{ data.tags.join(", ") }</p>
            }
            if !analysis.analysis_prompt.is_empty() {
                <details class="mt-3">
                    <summary class="cursor-pointer text-sm text-blue-600">{"Analysis prompt"}</summary>
                    <pre class="whitespace-pre-wrap text-sm mt-2">{ &analysis.analysis_prompt }</pre>
                </details>
            }
        </>
    }
}

#[function_component(AnalysisPanel)]
fn analysis_panel(props: &VideoPageProps) -> Html {
    let gateway = use_gateway();
    let (analysis, retry) = use_fenced_load(props.video_id.clone(), move |video_id: String| async move {
        gateway.client().analyze_video(&video_id).await
    });

    let content = match &*analysis {
        Loadable::Idle | Loadable::Loading => html! { <p class="text-gray-500">{"Analyzing..."}</p> },
        Loadable::Failed(error) => html! {
            <ErrorNotice message={error.user_message()} on_retry={retry} />
        },
        Loadable::Ready(analysis) => analysis_summary(analysis),
    };

    html! {
        <section class="bg-white rounded-lg shadow p-4 mb-6">{ content }</section>
    }
}

fn comment_item(comment: &VideoComment) -> Html {
    html! {
        <li class="py-3">
            <p class="text-sm">
                <span class="font-semibold">{ &comment.author }</span>
                <span class="text-gray-500 ml-2">{ format_iso8601_date(&comment.published_at) }</span>
                <span class="text-gray-500 ml-2">{ format!("👍 {}", format_compact(comment.like_count)) }</span>
            </p>
            <p class="whitespace-pre-wrap">{ &comment.text }</p>
            if !comment.replies.is_empty() {
                <ul class="ml-6 mt-2 border-l pl-3">
                    { for comment.replies.iter().map(|reply| html! {
                        <li class="py-1 text-sm">
                            <span class="font-semibold">{ &reply.author }</span>
                            { format!(": {}", reply.text) }
                        </li>
                    })}
                </ul>
            }
        </li>
    }
}

#[function_component(CommentsPanel)]
fn comments_panel(props: &VideoPageProps) -> Html {
    let gateway = use_gateway();
    let order = use_state(CommentOrder::default);
    let include_replies = use_state(|| false);
    let page_size = gateway.client().config().comment_page_size;

    let key = (props.video_id.clone(), *order, *include_replies);
    let (comments, retry) = use_fenced_load(key, move |(video_id, order, include_replies)| async move {
        let request = CommentsRequest {
            order,
            include_replies,
            ..CommentsRequest::new(&video_id, page_size)
        };
        gateway.client().video_comments(&request).await
    });

    let toggle_order = {
        let order = order.clone();
        Callback::from(move |_: MouseEvent| {
            order.set(match *order {
                CommentOrder::Relevance => CommentOrder::Time,
                CommentOrder::Time => CommentOrder::Relevance,
            })
        })
    };
    let toggle_replies = {
        let include_replies = include_replies.clone();
        Callback::from(move |_: Event| include_replies.set(!*include_replies))
    };

    let content = match &*comments {
        Loadable::Idle | Loadable::Loading => html! { <p class="text-gray-500">{"Loading comments..."}</p> },
        Loadable::Failed(error) => html! {
            <ErrorNotice message={error.user_message()} on_retry={retry} />
        },
        Loadable::Ready(response) if response.comments.is_empty() => html! {
            <p class="text-gray-500">{"No comments."}</p>
        },
        Loadable::Ready(response) => html! {
            <>
                <p class="text-sm text-gray-600">{ format!("{} comments", response.total_results) }</p>
                <ul class="divide-y">
                    { for response.comments.iter().map(comment_item) }
                </ul>
            </>
        },
    };

    html! {
        <section class="bg-white rounded-lg shadow p-4 mb-6">
            <div class="flex justify-between items-center mb-3">
                <h2 class="text-lg font-semibold">{"Comments"}</h2>
                <div class="flex gap-4 text-sm">
                    <button onclick={toggle_order} class="text-blue-600 hover:underline">
                        { format!("Sort: {}", order.display_name()) }
                    </button>
                    <label>
                        <input type="checkbox" checked={*include_replies} onchange={toggle_replies} />
                        {" Replies"}
                    </label>
                </div>
            </div>
            { content }
        </section>
    }
}
