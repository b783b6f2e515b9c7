use crate::app::use_gateway;
use crate::hooks::use_fenced_load;
use crate::load::Loadable;
use crate::search::components::ErrorNotice;
use crate::transcript::aggregator::{fetch_enrichment, EnrichmentBundle, FacetKind};
use crate::utils::format_millis;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TranscriptPanelProps {
    pub video_id: String,
}

fn facet_body(bundle: &EnrichmentBundle, kind: FacetKind) -> Html {
    match kind {
        FacetKind::Basic => match &bundle.basic {
            Some(transcript) => html! {
                <>
                    <div class="whitespace-pre-wrap">
                        { if transcript.transcript.is_empty() { "No transcript text." } else { transcript.transcript.as_str() } }
                    </div>
                    if !transcript.segments.is_empty() {
                        <ul class="mt-4 text-sm text-gray-600 space-y-1">
                            { for transcript.segments.iter().map(|segment| html! {
                                <li>
                                    <span class="font-mono mr-2">{ format_millis(segment.offset) }</span>
                                    { &segment.text }
                                </li>
                            })}
                        </ul>
                    }
                </>
            },
            None => html! {},
        },
        FacetKind::Enhanced => match &bundle.enhanced {
            Some(enhanced) => html! {
                <pre class="whitespace-pre-wrap text-sm">{ enhanced.display_text() }</pre>
            },
            None => html! {},
        },
        FacetKind::KeyMoments => match &bundle.key_moments {
            Some(moments) => html! {
                <div class="whitespace-pre-wrap">
                    { if moments.text.is_empty() { "No key moments found." } else { moments.text.as_str() } }
                </div>
            },
            None => html! {},
        },
        FacetKind::Segmented => match &bundle.segmented {
            Some(segments) => html! {
                <div class="whitespace-pre-wrap">
                    { if segments.text.is_empty() { "Could not build segments." } else { segments.text.as_str() } }
                </div>
            },
            None => html! {},
        },
    }
}

#[function_component(TranscriptPanel)]
pub fn transcript_panel(props: &TranscriptPanelProps) -> Html {
    let gateway = use_gateway();
    let selected_tab = use_state(|| None::<FacetKind>);

    let (bundle, retry) = use_fenced_load(props.video_id.clone(), move |video_id: String| async move {
        fetch_enrichment(gateway.client(), &video_id).await
    });

    let content = match &*bundle {
        Loadable::Idle | Loadable::Loading => html! {
            <p class="text-gray-500">{"Loading transcript..."}</p>
        },
        Loadable::Failed(error) => html! {
            <ErrorNotice message={error.user_message()} on_retry={retry} />
        },
        Loadable::Ready(bundle) => {
            let available = bundle.available();
            let active = (*selected_tab)
                .filter(|kind| bundle.has(*kind))
                .or_else(|| available.first().copied());

            html! {
                <>
                    <div class="flex gap-2 mb-4">
                        { for available.iter().map(|kind| {
                            let kind = *kind;
                            let selected_tab = selected_tab.clone();
                            let onclick = Callback::from(move |_: MouseEvent| selected_tab.set(Some(kind)));
                            let class = if Some(kind) == active {
                                "px-3 py-1 rounded bg-blue-600 text-white"
                            } else {
                                "px-3 py-1 rounded bg-gray-200"
                            };
                            html! { <button {class} {onclick}>{ kind.display_name() }</button> }
                        })}
                    </div>
                    { active.map(|kind| facet_body(bundle, kind)).unwrap_or_default() }
                </>
            }
        }
    };

    html! {
        <section class="bg-white rounded-lg shadow p-4 mb-6">
            <h2 class="text-lg font-semibold mb-3">{"Transcript"}</h2>
            { content }
        </section>
    }
}
