use crate::error::RemoteResult;
use crate::load::{Fence, Loadable};
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Loads `key` with `load` whenever the key changes or `retry` is emitted.
///
/// Each load takes a ticket from a fence owned by the component, so a slow
/// reply for an old key never replaces the state of a newer one.
#[hook]
pub fn use_fenced_load<K, T, F, Fut>(key: K, load: F) -> (UseStateHandle<Loadable<T>>, Callback<()>)
where
    K: PartialEq + Clone + 'static,
    T: 'static,
    F: FnOnce(K) -> Fut + 'static,
    Fut: Future<Output = RemoteResult<T>> + 'static,
{
    let state = use_state(|| Loadable::Idle);
    let attempt = use_state(|| 0u32);
    let fence = use_mut_ref(Fence::default);

    {
        let state = state.clone();
        use_effect_with((key, *attempt), move |(key, _)| {
            let ticket = fence.borrow_mut().issue();
            state.set(Loadable::Loading);
            let pending = load(key.clone());
            spawn_local(async move {
                let result = pending.await;
                if fence.borrow().admits(ticket) {
                    state.set(result.into());
                }
            });
            || ()
        });
    }

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: ()| attempt.set(*attempt + 1))
    };

    (state, retry)
}
