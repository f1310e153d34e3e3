//! Collection browser.

use leptos::prelude::*;
use leptos_icons::Icon;
use reelshelf_core::models::CollectionSummary;
use reelshelf_core::session;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/collections.module.css");

#[component]
pub fn CollectionsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let items = Memo::new(move |_| ctx.with(|s| s.collections().items().to_vec()));

    view! {
        <section class=css::panel>
            <h2 class=css::heading>
                <Icon icon=ic::FOLDER />
                "Collections"
            </h2>
            {move || {
                let items = items.get();
                if items.is_empty() {
                    view! { <p class=css::empty>"No collections yet"</p> }.into_any()
                } else {
                    view! {
                        <ul class=css::list>
                            {items
                                .into_iter()
                                .map(|collection| view! { <CollectionRow collection /> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn CollectionRow(collection: CollectionSummary) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = collection.id;

    let expanded = Memo::new(move |_| ctx.with(|s| s.collections().is_expanded(id)));
    let members = Memo::new(move |_| {
        ctx.with(|s| s.collections().members(id).map(<[_]>::to_vec))
    });

    let on_toggle = move |_| {
        if expanded.get_untracked() {
            ctx.update(|s| s.collapse_collection(id));
        } else {
            ctx.spawn("expand collection", move |ctx| async move {
                session::expand_collection(&ctx.session, &ctx.api, id).await
            });
        }
    };

    view! {
        <li class=css::row>
            <button class=css::toggle on:click=on_toggle aria-expanded=move || expanded.get().to_string()>
                <span class=move || {
                    if expanded.get() {
                        format!("{} {}", css::chevron, css::chevronOpen)
                    } else {
                        css::chevron.to_string()
                    }
                }>
                    <Icon icon=ic::CHEVRON_DOWN />
                </span>
                <span class=css::name>{collection.name}</span>
                <span class=css::count>{collection.count}</span>
            </button>
            <Show when=move || expanded.get()>
                {move || match members.get() {
                    None => view! { <p class=css::empty>"Loading…"</p> }.into_any(),
                    Some(list) => view! {
                        <ul class=css::members>
                            {list
                                .into_iter()
                                .map(|entry| view! {
                                    <li class=css::member>
                                        {(!entry.poster_url.is_empty()).then(|| view! {
                                            <img class=css::thumb src=entry.poster_url.clone() alt="" loading="lazy" />
                                        })}
                                        <span>{entry.title}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                }}
            </Show>
        </li>
    }
}
