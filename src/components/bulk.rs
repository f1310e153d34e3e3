//! Multi-select toolbar.
//!
//! Only rendered in edit mode. Actions stay disabled until something is
//! selected; each one asks for confirmation before any request is sent.

use leptos::prelude::*;
use leptos_icons::Icon;
use reelshelf_core::session::{self, BulkInput};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{FORMATS, VERSIONS};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/bulk.module.css");

#[component]
pub fn BulkBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let editing = Memo::new(move |_| ctx.with(|s| s.selection().is_editing()));

    view! {
        <Show when=move || editing.get()>
            <BulkControls />
        </Show>
    }
}

#[component]
fn BulkControls() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let count = Memo::new(move |_| ctx.with(|s| s.selection().selected_count()));
    let all_checked = Memo::new(move |_| ctx.with(|s| s.selection().select_all_checked()));
    let enabled = Memo::new(move |_| ctx.with(|s| s.selection().actions_enabled()));
    let inputs = Memo::new(move |_| ctx.with(|s| s.bulk_inputs().clone()));

    let set_input = move |input: BulkInput| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            ctx.update(|s| s.set_bulk_input(input, value));
        }
    };

    let on_delete = move |_| {
        ctx.spawn("bulk delete", |ctx| async move {
            session::run_bulk_delete(&ctx.session, &ctx.api, dom::confirm).await
        });
    };
    let on_update = move |_| {
        ctx.spawn("bulk update", |ctx| async move {
            session::run_bulk_update(&ctx.session, &ctx.api, dom::confirm).await
        });
    };
    let on_attach = move |_| {
        ctx.spawn("bulk attach", |ctx| async move {
            session::run_bulk_attach(&ctx.session, &ctx.api, dom::confirm).await
        });
    };

    view! {
        <div class=css::bar>
            <div class=css::group>
                <label class=css::check>
                    <input
                        type="checkbox"
                        prop:checked=move || all_checked.get()
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            ctx.update(|s| s.set_select_all(checked));
                        }
                    />
                    "Select all"
                </label>
                <button class=css::textButton on:click=move |_| {
                    ctx.update(|s| s.select_none());
                }>
                    "Select none"
                </button>
                <span class=css::count>{move || format!("{} selected", count.get())}</span>
            </div>

            <div class=css::group>
                <select
                    class=css::input
                    prop:value=move || inputs.get().status
                    on:change=set_input(BulkInput::Status)
                >
                    <option value="">"Status…"</option>
                    <option value="owned">"Owned"</option>
                    <option value="wanted">"Wanted"</option>
                </select>
                <select
                    class=css::input
                    prop:value=move || inputs.get().format
                    on:change=set_input(BulkInput::Format)
                >
                    <option value="">"Format…"</option>
                    {FORMATS
                        .iter()
                        .map(|&f| view! { <option value=f>{f}</option> })
                        .collect_view()}
                </select>
                <input
                    class=css::input
                    list="bulk-versions"
                    placeholder="Version…"
                    prop:value=move || inputs.get().version
                    on:input=set_input(BulkInput::Version)
                />
                <datalist id="bulk-versions">
                    {VERSIONS.iter().map(|&v| view! { <option value=v /> }).collect_view()}
                </datalist>
                <button
                    class=css::button
                    disabled=move || !enabled.get()
                    on:click=on_update
                >
                    "Apply"
                </button>
            </div>

            <div class=css::group>
                <input
                    class=css::input
                    placeholder="Collections, comma separated"
                    prop:value=move || inputs.get().collections
                    on:input=set_input(BulkInput::Collections)
                />
                <button
                    class=css::button
                    disabled=move || !enabled.get()
                    on:click=on_attach
                >
                    <Icon icon=ic::FOLDER />
                    "Add to collection"
                </button>
            </div>

            <button
                class=format!("{} {}", css::button, css::danger)
                disabled=move || !enabled.get()
                on:click=on_delete
            >
                <Icon icon=ic::TRASH />
                "Delete"
            </button>
        </div>
    }
}
