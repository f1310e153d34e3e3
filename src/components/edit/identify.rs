//! Metadata lookup for the edit dialog.

use leptos::prelude::*;
use leptos_icons::Icon;
use reelshelf_core::models::Suggestion;
use reelshelf_core::session;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/edit/edit.module.css");

#[derive(Debug, Clone, PartialEq)]
enum Lookup {
    Idle,
    Searching,
    Found(Vec<Suggestion>),
    Failed(String),
}

/// "Identify" button plus the candidate list it opens. Picking a candidate
/// fills title, year and TMDb id.
#[component]
pub fn IdentifyButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let lookup = RwSignal::new(Lookup::Idle);

    let on_identify = move |_| {
        lookup.set(Lookup::Searching);
        spawn_local(async move {
            let next = match session::identify(&ctx.session, &ctx.api).await {
                Ok(found) => Lookup::Found(found),
                Err(e) => {
                    tracing::debug!(error = %e, "identify failed");
                    Lookup::Failed(e.to_string())
                }
            };
            // The dialog may have closed while the lookup ran.
            let _ = lookup.try_set(next);
        });
    };

    let pick = move |suggestion: Suggestion| {
        ctx.update(|s| s.apply_suggestion(&suggestion));
        lookup.set(Lookup::Idle);
    };

    view! {
        <button
            type="button"
            class=css::secondary
            disabled=move || lookup.with(|l| *l == Lookup::Searching)
            on:click=on_identify
        >
            <Icon icon=ic::SEARCH />
            "Identify"
        </button>
        {move || match lookup.get() {
            Lookup::Idle => ().into_any(),
            Lookup::Searching => view! { <p class=css::hint>"Searching…"</p> }.into_any(),
            Lookup::Failed(message) => view! { <p class=css::error>{message}</p> }.into_any(),
            Lookup::Found(list) if list.is_empty() => {
                view! { <p class=css::hint>"No matches"</p> }.into_any()
            }
            Lookup::Found(list) => view! {
                <ul class=css::suggestions>
                    {list
                        .into_iter()
                        .map(|suggestion| {
                            let label = match suggestion.year() {
                                year if year.is_empty() => suggestion.title.clone(),
                                year => format!("{} ({year})", suggestion.title),
                            };
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class=css::suggestion
                                        on:click=move |_| pick(suggestion.clone())
                                    >
                                        {label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_any(),
        }}
    }
}
