use crate::search::filters::{DurationClass, FilterCriteria, Period};
use crate::search::ratio::RatioBucket;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::{function_component, html, Callback, Html, Properties};

// Helper to read "value" from any event target without HtmlSelectElement.
pub(crate) fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub criteria: FilterCriteria,
    pub on_change: Callback<FilterCriteria>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let on_duration_change = {
        let criteria = props.criteria.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(duration) = event_value(&e).as_deref().and_then(DurationClass::from_key) {
                on_change.emit(criteria.clone().with_duration(duration));
            }
        })
    };

    let on_period_change = {
        let criteria = props.criteria.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(period) = event_value(&e).as_deref().and_then(Period::from_key) {
                on_change.emit(criteria.clone().with_period(period));
            }
        })
    };

    html! {
        <div class="search-options flex flex-wrap gap-6 mb-4">
            <label class="search-option">
                { "Length" }
                <select value={props.criteria.duration.key()} onchange={on_duration_change}>
                    {
                        for DurationClass::all_variants().into_iter().map(|duration| html! {
                            <option value={duration.key()} selected={duration == props.criteria.duration}>
                                { duration.display_name() }
                            </option>
                        })
                    }
                </select>
            </label>

            <label class="search-option">
                { "Uploaded" }
                <select value={props.criteria.period.key()} onchange={on_period_change}>
                    {
                        for Period::all_variants().into_iter().map(|period| html! {
                            <option value={period.key()} selected={period == props.criteria.period}>
                                { period.display_name() }
                            </option>
                        })
                    }
                </select>
            </label>

            <fieldset class="search-option">
                <legend>{ "Views / subscribers" }</legend>
                {
                    for RatioBucket::all_variants().into_iter().map(|bucket| {
                        let criteria = props.criteria.clone();
                        let on_change = props.on_change.clone();
                        let on_toggle = Callback::from(move |_: Event| {
                            on_change.emit(criteria.clone().toggle_ratio(bucket));
                        });
                        html! {
                            <label class="mr-3">
                                <input
                                    type="checkbox"
                                    checked={props.criteria.ratio_buckets.contains(&bucket)}
                                    onchange={on_toggle}
                                />
                                { format!(" {}", bucket.display_name()) }
                            </label>
                        }
                    })
                }
            </fieldset>
        </div>
    }
}
