//! Debounced search box.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::SEARCH_DEBOUNCE_MS;

stylance::import_crate_style!(css, "src/components/toolbar/toolbar.module.css");

/// Search input that only queries once typing pauses.
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // The input owns its text after the first render.
    let initial = ctx.with_untracked(|s| s.query().query.clone());
    let keystroke = StoredValue::new(0u64);

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let stamp = keystroke.get_value().wrapping_add(1);
        keystroke.set_value(stamp);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if keystroke.try_get_value() == Some(stamp) {
                ctx.load(|s| s.on_search_changed(&text));
            }
        });
    };

    view! {
        <label class=css::search>
            <Icon icon=ic::SEARCH />
            <input
                type="search"
                class=css::searchInput
                placeholder="Search titles"
                autocomplete="off"
                value=initial
                on:input=on_input
            />
        </label>
    }
}
